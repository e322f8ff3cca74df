use thiserror::Error;

#[derive(Error, Debug)]
pub enum OttoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid intake sheet: {0}")]
    InvalidIntake(String),

    #[error("Document not postable: {0}")]
    NotPostable(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, OttoError>;
