use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Balance error: Value is an empty string")]
    Empty,
    #[error("Balance error: {0}")]
    InvalidFormat(String)
}
