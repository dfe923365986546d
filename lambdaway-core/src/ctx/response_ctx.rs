use http::{HeaderMap, HeaderValue, StatusCode, header};

/// A response produced by the proxy itself instead of the upstream.
#[derive(Debug)]
pub struct ResponseCtx {
    pub request_id: Option<String>,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseCtx {
    pub fn new(
        request_id: Option<String>,
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        Self {
            request_id,
            status,
            headers,
            body,
        }
    }

    /// Plain-text diagnostic response, terminated by a newline.
    pub fn plain_text(request_id: Option<String>, status: StatusCode, message: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );

        Self::new(request_id, status, headers, format!("{message}\n").into_bytes())
    }
}
