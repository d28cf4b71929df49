// Crate error type
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodcastrError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file exists but its schema is not one we understand
    #[error("unsupported settings version {found} (expected at most {supported})")]
    Settings { found: i32, supported: i32 },
}

pub type Result<T> = std::result::Result<T, PodcastrError>;
