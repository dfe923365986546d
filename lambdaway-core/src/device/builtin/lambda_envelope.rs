use crate::ctx::{InboundRequest, RequestCtx, RequestId, ResponseCtx};
use crate::device::core::{Device, DeviceResult};
use crate::envelope::{
    EnvelopeEncoder, InvocationEvent, InvocationTime, JsonEncoder, OsRandom, OutboundRequest,
    RandomSource,
};
use http::StatusCode;

/// Rewrites every request into a Lambda invocation.
///
/// Per request:
/// 1. Snapshot is read from the context (already captured at hydration)
/// 2. Request id and timestamp are generated once
/// 3. The event is assembled and encoded
/// 4. The outbound `POST` is stored in the context for the gateway to forward
///
/// An encoding failure answers the client with a 500 and nothing is forwarded.
pub struct LambdaEnvelopeDevice {
    random: Box<dyn RandomSource>,
    encoder: Box<dyn EnvelopeEncoder>,
}

impl Default for LambdaEnvelopeDevice {
    fn default() -> Self {
        Self::new(Box::new(OsRandom), Box::new(JsonEncoder))
    }
}

impl LambdaEnvelopeDevice {
    pub const NAME: &'static str = "lambda_envelope";

    pub fn new(random: Box<dyn RandomSource>, encoder: Box<dyn EnvelopeEncoder>) -> Self {
        Self { random, encoder }
    }

    /// Build the invocation event for `request`, stamped with a fresh id and
    /// the current time.
    pub fn build_event(&self, request: &InboundRequest) -> (RequestId, InvocationEvent) {
        let request_id = RequestId::generate(self.random.as_ref());
        let time = InvocationTime::now();
        let event = InvocationEvent::assemble(request, &request_id, &time);
        (request_id, event)
    }
}

impl Device for LambdaEnvelopeDevice {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        let (request_id, event) = self.build_event(ctx.inbound());
        let id = request_id.to_string();
        ctx.extensions.insert(request_id);

        match OutboundRequest::rewrite(ctx.inbound(), &event, self.encoder.as_ref()) {
            Ok(outbound) => {
                tracing::debug!(
                    request_id = %id,
                    route_key = %event.route_key,
                    content_length = outbound.content_length(),
                    "request rewritten to lambda invocation"
                );
                ctx.set_outbound(outbound);
                DeviceResult::Continue
            }
            Err(err) => {
                tracing::error!(
                    request_id = %id,
                    error = %err,
                    "failed to encode invocation event"
                );
                DeviceResult::Respond(ResponseCtx::plain_text(
                    Some(id),
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &err.to_string(),
                ))
            }
        }
    }
}
