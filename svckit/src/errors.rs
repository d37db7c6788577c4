use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrotaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Service load error: {0}")]
    ServiceLoad(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<serde_json::Error> for FrotaError {
    fn from(err: serde_json::Error) -> Self {
        FrotaError::Parse(err.to_string())
    }
}

impl From<anyhow::Error> for FrotaError {
    fn from(err: anyhow::Error) -> Self {
        FrotaError::Unknown(err.to_string())
    }
}
