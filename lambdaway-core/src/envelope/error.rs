use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("JSON marshal error: {0}")]
    Serialize(#[from] serde_json::Error),
}
