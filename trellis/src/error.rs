use std::io;

use pagedom::DomError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Error returned by an event handler. Aborts the dispatch it occurred in.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that end the runtime loop.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("handler failed: {0}")]
    Handler(#[from] HandlerError),
}

impl From<DomError> for RuntimeError {
    fn from(err: DomError) -> Self {
        Self::Handler(HandlerError::Dom(err))
    }
}
