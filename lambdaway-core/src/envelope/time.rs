use chrono::{DateTime, SecondsFormat, Utc};

/// The single instant an invocation event is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationTime(DateTime<Utc>);

impl InvocationTime {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// e.g. `2024-05-01T12:30:45Z`
    pub fn rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}
