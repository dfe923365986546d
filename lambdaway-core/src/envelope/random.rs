use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("random source unavailable: {0}")]
pub struct RandomUnavailable(pub String);

/// Source of the bytes behind each request id.
///
/// Implementations must be safe to share across worker threads.
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomUnavailable>;
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomUnavailable> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|err| RandomUnavailable(err.to_string()))
    }
}
