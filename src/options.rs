use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Command-line options for the driver.
///
/// Populated exactly once from the argument vector and never mutated
/// afterwards; the driver receives it by reference.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "chocopyc",
    about = "ChocoPy front-end driver",
    no_binary_name = true,
    disable_help_flag = true
)]
pub struct DriverOptions {
    /// Usage help
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Lexical analysis
    #[arg(short, long, action = ArgAction::SetTrue, default_value_t = true)]
    pub lexer: bool,

    /// Source files to the driver, processed in command-line order
    #[arg(value_name = "source file")]
    pub input_files: Vec<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unrecognized argument `{0}`")]
    InvalidArgument(String),
    /// No current flag takes a value; this becomes reachable as soon as
    /// one does.
    #[error("missing value for argument `{0}`")]
    MissingValue(String),
}

impl From<clap::Error> for OptionsError {
    fn from(err: clap::Error) -> Self {
        let offender = err
            .get(ContextKind::InvalidArg)
            .map(ToString::to_string)
            .unwrap_or_default();
        match err.kind() {
            ErrorKind::InvalidValue
            | ErrorKind::NoEquals
            | ErrorKind::MissingRequiredArgument => OptionsError::MissingValue(offender),
            _ => OptionsError::InvalidArgument(offender),
        }
    }
}

/// Parse raw process arguments, excluding the program name.
pub fn parse<I, T>(args: I) -> Result<DriverOptions, OptionsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    DriverOptions::try_parse_from(args).map_err(OptionsError::from)
}

/// Usage text, rendered once for `--help` and for argument errors.
pub fn usage() -> String {
    DriverOptions::command().render_long_help().to_string()
}
