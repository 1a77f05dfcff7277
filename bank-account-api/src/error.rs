use thiserror::Error;

/// Errors raised by account and loan operations.
///
/// Every failure is reported before any state is touched, so an `Err` always
/// leaves the account exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AccountError {
    /// Build an `InvalidArgument` error naming the offending argument and its value.
    pub fn invalid_argument(argument: &str, reason: impl std::fmt::Display) -> Self {
        AccountError::InvalidArgument(format!("{argument} {reason}"))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AccountError::InvalidArgument(_))
    }
}

pub type AccountResult<T> = Result<T, AccountError>;
