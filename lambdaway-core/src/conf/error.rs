use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listen address '{listen}', expected ip:port")]
    InvalidListen { listen: String },

    #[error("invalid upstream '{upstream}', expected host:port")]
    InvalidUpstream { upstream: String },

    #[error("worker thread count must be greater than zero")]
    InvalidThreads,
}
