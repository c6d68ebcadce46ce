#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unknown scope level: {0}")]
    UnknownScope(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
