use crate::{ast::build::BuildError, parser::error::Error as ParseError};
use std::{fmt, io};

/// Utility enum to package errors that can occur while reading an expression.
#[derive(Debug)]
pub enum Error {
    /// The text does not match the grammar.
    Parse(ParseError),

    /// The parse tree could not be built into an expression.
    Build(BuildError),

    /// The source file could not be read.
    Io(io::Error),
}

impl Error {
    /// Report this error to stderr. `input` is the text that was being parsed, and `src_id`
    /// names it in the report.
    ///
    /// I/O errors have no source location, so they are printed as a single line.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        match self {
            Self::Parse(err) => err.report_to_stderr(src_id, input),
            Self::Build(err) => err.report_to_stderr(src_id, input),
            Self::Io(err) => {
                eprintln!("error: could not read {}: {}", src_id, err);
                Ok(())
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::Build(err) => fmt::Display::fmt(err, f),
            Self::Io(err) => write!(f, "could not read the source file: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Build(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Self::Build(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
