use crate::envelope::{EnvelopeError, InvocationEvent};

/// Turns an invocation event into the bytes sent upstream.
pub trait EnvelopeEncoder: Send + Sync {
    fn encode(&self, event: &InvocationEvent) -> Result<Vec<u8>, EnvelopeError>;
}

/// Compact UTF-8 JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl EnvelopeEncoder for JsonEncoder {
    fn encode(&self, event: &InvocationEvent) -> Result<Vec<u8>, EnvelopeError> {
        Ok(serde_json::to_vec(event)?)
    }
}
