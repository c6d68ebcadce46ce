use docscope_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Symbol tree error: {0}")]
    Tree(#[from] ApiError),
    #[error("Invalid kind chain pattern: {0}")]
    InvalidPattern(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DocscopeError>;
