use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(
        code(day8::io),
        help("run the solver from the directory that holds the puzzle input")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid junction box on line {line} ({content:?}): {reason}")]
    #[diagnostic(
        code(day8::parse),
        help("every line must hold exactly three comma-separated integers, e.g. `162,817,812`")
    )]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
}
