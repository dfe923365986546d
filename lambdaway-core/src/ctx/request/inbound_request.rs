use http::{HeaderMap, Method, Uri, Version, header};

/// Read-only view of the request as the client sent it.
#[derive(Debug, Clone, Default)]
pub struct InboundRequest {
    method: Method,
    path: String,
    raw_query: String,
    host: String,
    headers: HeaderMap,
    remote_addr: String,
    version: Version,
}

impl InboundRequest {
    pub fn new(
        uri: &Uri,
        method: &Method,
        headers: &HeaderMap,
        version: Version,
        remote_addr: impl Into<String>,
    ) -> Self {
        // HTTP/2 clients send :authority instead of Host.
        let host = headers
            .get(header::HOST)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .or_else(|| uri.authority().map(|authority| authority.as_str().to_owned()))
            .unwrap_or_default();

        Self {
            method: method.clone(),
            path: uri.path().to_owned(),
            raw_query: uri.query().unwrap_or_default().to_owned(),
            host,
            headers: headers.clone(),
            remote_addr: remote_addr.into(),
            version,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Host header value, possibly with a `:port` suffix.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// `ip:port` of the peer, or empty when the transport has no inet address.
    pub fn remote_addr(&self) -> &str {
        &self.remote_addr
    }

    /// Protocol string reported in `requestContext.http.protocol`.
    pub fn protocol(&self) -> &'static str {
        match self.version {
            Version::HTTP_09 => "HTTP/0.9",
            Version::HTTP_10 => "HTTP/1.0",
            Version::HTTP_2 => "HTTP/2.0",
            Version::HTTP_3 => "HTTP/3.0",
            _ => "HTTP/1.1",
        }
    }
}
