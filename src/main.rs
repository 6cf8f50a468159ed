mod driver;
mod options;

use std::path::Path;
use std::process::ExitCode;

use log::debug;

use driver::{LexicalAnalyzer, StageError};

/// Stand-in analysis stage until a real tokenizer backend is wired in.
// TODO: Replace with the actual lexer once that crate lands.
struct DebugAnalyzer;

impl LexicalAnalyzer for DebugAnalyzer {
    fn analyze(&mut self, path: &Path, source: &str) -> Result<(), StageError> {
        debug!("{}: {} bytes", path.display(), source.len());
        Ok(())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = match options::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", options::usage());
            return ExitCode::from(2);
        }
    };

    if args.help {
        print!("{}", options::usage());
        return ExitCode::SUCCESS;
    }

    match driver::run(&args, &mut DebugAnalyzer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
