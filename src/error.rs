use scylla::errors::{ExecutionError, NewSessionError};
use std::fmt;

#[derive(Debug)]
pub enum CqlError {
    Session(NewSessionError),
    Execution(ExecutionError),
}

impl fmt::Display for CqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CqlError::Session(e) => write!(f, "creating session: {e}"),
            CqlError::Execution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CqlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CqlError::Session(e) => Some(e),
            CqlError::Execution(e) => Some(e),
        }
    }
}

impl From<NewSessionError> for CqlError {
    fn from(e: NewSessionError) -> Self {
        CqlError::Session(e)
    }
}

impl From<ExecutionError> for CqlError {
    fn from(e: ExecutionError) -> Self {
        CqlError::Execution(e)
    }
}
