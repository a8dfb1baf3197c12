use thiserror::Error;

/// Errors raised when a document query or mutation names the wrong element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id '{0}'")]
    NotFound(String),

    #[error("element '{0}' is not an input")]
    NotAnInput(String),

    #[error("element '{0}' is not a form")]
    NotAForm(String),
}
