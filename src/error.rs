use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    InputNotFound { path: PathBuf, source: io::Error },
    Io(io::Error),
    Parse { line: usize, message: String },
    NoPeriod { steps: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InputNotFound { path, source } => {
                write!(f, "Can't open input {}: {}", path.display(), source)
            }
            Error::Io(error) => write!(f, "Failed to read input: {}", error),
            Error::Parse { line, message } => write!(f, "Line {}: {}", line, message),
            Error::NoPeriod { steps } => {
                write!(f, "No period found for every axis within {} steps", steps)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InputNotFound { source, .. } => Some(source),
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}
