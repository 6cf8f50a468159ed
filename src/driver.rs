use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::options::DriverOptions;

pub type StageError = Box<dyn std::error::Error + Send + Sync>;

/// Seam between the driver and the lexer engine.
///
/// The driver calls `analyze` once per input file, in command-line order,
/// handing over the file contents it already read.
pub trait LexicalAnalyzer {
    fn analyze(&mut self, path: &Path, source: &str) -> Result<(), StageError>;
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("lexical analysis of `{}` failed: {source}", .path.display())]
    Analysis {
        path: PathBuf,
        #[source]
        source: StageError,
    },
}

/// Process every input file in order, dispatching to the analysis stage
/// when lexer mode is enabled. The first failure aborts the run.
pub fn run<A>(opts: &DriverOptions, analyzer: &mut A) -> Result<(), DriverError>
where
    A: LexicalAnalyzer,
{
    for path in &opts.input_files {
        let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadSource {
            path: path.clone(),
            source,
        })?;
        if opts.lexer {
            debug!("lexing {} ({} bytes)", path.display(), source.len());
            analyzer
                .analyze(path, &source)
                .map_err(|source| DriverError::Analysis {
                    path: path.clone(),
                    source,
                })?;
        }
    }
    Ok(())
}
