use thiserror::Error;

/// Result alias for fallible [`Duration`](crate::duration::Duration) operations.
pub type Result<T> = std::result::Result<T, HourError>;

/// Errors raised by duration construction, parsing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HourError {
    /// Bad constructor input, malformed text, bad scale factor or a
    /// subtraction that would go below zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A comparison was attempted against something that is not a duration.
    #[error("type mismatch: cannot compare a duration with {found}")]
    TypeMismatch { found: &'static str },
}

impl HourError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
