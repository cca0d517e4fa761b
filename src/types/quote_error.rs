use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid format: {0}")]
    Format(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for QuoteError {
    fn from(error: reqwest::Error) -> Self {
        QuoteError::Transport(error.to_string())
    }
}

impl From<anyhow::Error> for QuoteError {
    fn from(error: anyhow::Error) -> Self {
        QuoteError::Storage(format!("{:#}", error))
    }
}
