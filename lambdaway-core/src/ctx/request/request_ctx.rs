use crate::ctx::{InboundRequest, RequestId};
use crate::envelope::OutboundRequest;
use bytes::Bytes;
use http::{Extensions, HeaderMap, Method, Uri, Version};
use pingora::prelude::Session;
use pingora::protocols::l4::socket::SocketAddr as PingoraSocketAddr;

/// Canonical request context passed through the Lambdaway pipeline
#[derive(Debug)]
pub struct RequestCtx {
    /// Lifecycle flag to determine if the context has already been hydrated from a session.
    pub hydrated: bool,

    /// Request-scoped typed extensions (NOT forwarded).
    pub extensions: Extensions,

    /// The request as received, captured before any upstream rewrite.
    inbound: InboundRequest,

    /// Rewritten request for the invocation endpoint.
    outbound: Option<OutboundRequest>,
}

impl Default for RequestCtx {
    fn default() -> Self {
        Self::empty()
    }
}

/// Hydration API
impl RequestCtx {
    pub fn empty() -> Self {
        Self {
            hydrated: false,
            extensions: Extensions::new(),
            inbound: InboundRequest::default(),
            outbound: None,
        }
    }

    /// Create a boundary to decouple session from logic.
    /// This makes testing the hydration code easier.
    pub fn hydrate_from_session(&mut self, session: &Session) {
        let request_header = session.req_header();

        // Unix sockets carry no host:port; the address stays opaque (empty).
        let remote_addr = match session.client_addr() {
            Some(PingoraSocketAddr::Inet(addr)) => addr.to_string(),
            _ => String::new(),
        };

        self.hydrate(
            &request_header.uri,
            &request_header.method,
            &request_header.headers,
            request_header.version,
            remote_addr,
        );
    }

    pub(crate) fn hydrate(
        &mut self,
        uri: &Uri,
        method: &Method,
        headers: &HeaderMap,
        version: Version,
        remote_addr: String,
    ) {
        debug_assert!(!self.hydrated, "Already hydrated, cannot hydrate again");

        self.inbound = InboundRequest::new(uri, method, headers, version, remote_addr);
        self.hydrated = true;
    }

    pub fn inbound(&self) -> &InboundRequest {
        debug_assert!(self.hydrated);
        &self.inbound
    }
}

/// Upstream API
impl RequestCtx {
    pub fn outbound(&self) -> Option<&OutboundRequest> {
        self.outbound.as_ref()
    }

    pub(crate) fn set_outbound(&mut self, outbound: OutboundRequest) {
        self.outbound = Some(outbound);
    }

    /// Envelope bytes for the upstream body.
    ///
    /// Available on every call: Pingora replays the body filter when it
    /// retries the upstream, and each attempt must carry the full envelope.
    pub fn outbound_body(&self) -> Option<Bytes> {
        self.outbound.as_ref().map(|outbound| outbound.body().clone())
    }
}

/// Request ID API
impl RequestCtx {
    pub fn request_id(&self) -> Option<String> {
        self.extensions.get::<RequestId>().map(|id| id.0.clone())
    }
}
