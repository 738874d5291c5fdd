#[derive(Debug, thiserror::Error)]
pub enum RoiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid assumption: {0}")]
    InvalidAssumption(String),
}

pub type Result<T> = std::result::Result<T, RoiError>;
