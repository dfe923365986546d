use crate::ctx::InboundRequest;
use crate::envelope::{
    EnvelopeEncoder, EnvelopeError, InvocationEvent, InvocationTime, RandomSource,
    RandomUnavailable,
};
use chrono::{TimeDelta, TimeZone, Utc};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, Version};
use pingora::prelude::Session;
use tokio::io::{AsyncWriteExt, DuplexStream, duplex};

//-----------------------------------------------------------------------------
// Requests
//-----------------------------------------------------------------------------
pub(crate) fn input_to_header_map(input: &[(&str, &str)]) -> HeaderMap {
    let mut header_map = HeaderMap::new();
    for (k, v) in input {
        let name: HeaderName = k.parse().expect("invalid header name");
        let value: HeaderValue = v.parse().expect("invalid header value");
        header_map.append(name, value);
    }
    header_map
}

pub(crate) fn inbound(
    method: &str,
    target: &str,
    headers: &[(&str, &str)],
    remote_addr: &str,
) -> InboundRequest {
    let method: Method = method.parse().expect("invalid method");
    let uri: Uri = target.parse().expect("invalid target");

    InboundRequest::new(
        &uri,
        &method,
        &input_to_header_map(headers),
        Version::HTTP_11,
        remote_addr,
    )
}

pub struct RawHttpRequest {
    method: String,
    target: String,
    version: &'static str,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RawHttpRequest {
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            version: "HTTP/1.1",
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn header(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.headers.push((k.into(), v.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();

        // request line
        out.extend_from_slice(
            format!("{} {} {}\r\n", self.method, self.target, self.version).as_bytes(),
        );

        // headers
        for (k, v) in self.headers {
            out.extend_from_slice(format!("{k}: {v}\r\n").as_bytes());
        }

        // header/body separator
        out.extend_from_slice(b"\r\n");

        // body
        out.extend_from_slice(&self.body);

        out
    }
}

/// Build a real Session backed by memory IO.
///
/// The client half is returned so the test can read what the proxy answered.
pub(crate) async fn make_session(request: &[u8]) -> (Session, DuplexStream) {
    let (mut client_side, server_side) = duplex(64 * 1024);
    let mut session = Session::new_h1(Box::new(server_side));
    // Send synthetic HTTP request.
    client_side.write_all(request).await.unwrap();
    // Let pingora parse request.
    assert!(session.read_request().await.unwrap());
    (session, client_side)
}

//-----------------------------------------------------------------------------
// Impure inputs
//-----------------------------------------------------------------------------
pub(crate) const SEQUENTIAL_BYTES: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

/// Request id produced from [`SEQUENTIAL_BYTES`].
pub(crate) const SEQUENTIAL_ID: &str = "00010203-0405-4607-8809-0a0b0c0d0e0f";

pub(crate) struct FixedRandom(pub [u8; 16]);

impl RandomSource for FixedRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomUnavailable> {
        buf.copy_from_slice(&self.0[..buf.len()]);
        Ok(())
    }
}

pub(crate) struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill(&self, _buf: &mut [u8]) -> Result<(), RandomUnavailable> {
        Err(RandomUnavailable("entropy pool closed".to_owned()))
    }
}

pub(crate) struct FailingEncoder;

impl EnvelopeEncoder for FailingEncoder {
    fn encode(&self, _event: &InvocationEvent) -> Result<Vec<u8>, EnvelopeError> {
        Err(EnvelopeError::Serialize(
            <serde_json::Error as serde::ser::Error>::custom("unsupported value"),
        ))
    }
}

/// 2024-05-01T12:30:45.678Z
pub(crate) fn fixed_time() -> InvocationTime {
    let instant =
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap() + TimeDelta::milliseconds(678);
    InvocationTime::at(instant)
}
