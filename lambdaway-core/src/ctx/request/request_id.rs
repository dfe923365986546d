use crate::envelope::RandomSource;
use chrono::Utc;
use std::fmt::{Display, Formatter};
use uuid::Builder;

/// Request identifier, a random (v4) UUID in its hyphenated lowercase form.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a fresh id from `random`.
    ///
    /// When the random source is unavailable the bytes are derived from the
    /// current timestamp instead. Both paths carry the v4 version and the
    /// RFC 4122 variant bits.
    pub fn generate(random: &dyn RandomSource) -> Self {
        let mut buf = [0u8; 16];
        let bytes = match random.fill(&mut buf) {
            Ok(()) => buf,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to clock-derived request id");
                timestamp_bytes(Utc::now().timestamp_nanos_opt().unwrap_or_default())
            }
        };

        Self::from_bytes(bytes)
    }

    /// Byte 6 is forced to `0100xxxx`, byte 8 to `10xxxxxx`.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        RequestId(uuid.hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_owned())
    }
}

/// Spread a nanosecond timestamp over 16 bytes, least significant first.
pub(crate) fn timestamp_bytes(nanos: i64) -> [u8; 16] {
    let nanos = i128::from(nanos);
    std::array::from_fn(|i| (nanos >> (i * 8)) as u8)
}
