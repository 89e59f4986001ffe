//! Session protocol errors.

#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Malformed session: {0}")]
    InvalidFormat(String),
}
