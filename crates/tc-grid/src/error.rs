use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidState(&'static str),
    OutOfBounds { row: usize, col: usize },
    NotFound { row: usize, col: usize },
    InvariantViolation(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Self::OutOfBounds { row, col } => {
                write!(f, "location ({row}, {col}) out of bounds")
            }
            Self::NotFound { row, col } => {
                write!(f, "no region assigned at ({row}, {col})")
            }
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
