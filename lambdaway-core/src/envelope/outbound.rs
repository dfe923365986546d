use crate::ctx::InboundRequest;
use crate::envelope::{EnvelopeEncoder, EnvelopeError, InvocationEvent};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, Uri, header};

/// Invocation path of the Lambda runtime interface.
pub const INVOCATION_PATH: &str = "/2015-03-31/functions/function/invocations";

/// The request handed to the upstream once the envelope is built.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl OutboundRequest {
    /// Encode `event` and build the upstream request around it.
    ///
    /// Nothing is built when encoding fails.
    pub fn rewrite(
        request: &InboundRequest,
        event: &InvocationEvent,
        encoder: &dyn EnvelopeEncoder,
    ) -> Result<Self, EnvelopeError> {
        let body = Bytes::from(encoder.encode(event)?);

        let mut headers = request.headers().clone();
        // The body length is known up front, never chunk it.
        headers.remove(header::TRANSFER_ENCODING);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));

        Ok(Self {
            method: Method::POST,
            uri: Uri::from_static(INVOCATION_PATH),
            headers,
            body,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
