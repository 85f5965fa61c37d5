use thiserror::Error;

/// Terminal outcomes of a lookup that did not produce a response body
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Identifier failed the length check
    #[error("invalid id")]
    InvalidId,

    /// Primary source (and fallback, where one applies) produced nothing
    #[error("not found or inaccessible")]
    NotFound,

    /// Anything else that went wrong while building the response
    #[error("Error: {0}")]
    Internal(String),
}
