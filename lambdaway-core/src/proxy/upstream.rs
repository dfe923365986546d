use crate::envelope::OutboundRequest;
use http::HeaderName;
use pingora::prelude::*;
use pingora_http::RequestHeader;

/// Make Pingora's upstream request header match `outbound`.
///
/// Method and target are replaced, headers absent from `outbound` (such as
/// `Transfer-Encoding`) are dropped and every header it carries is written
/// with all of its values.
pub fn apply_outbound(outbound: &OutboundRequest, upstream: &mut RequestHeader) -> Result<()> {
    upstream.set_method(outbound.method().clone());
    upstream.set_uri(outbound.uri().clone());

    let stale: Vec<HeaderName> = upstream
        .headers
        .keys()
        .filter(|name| !outbound.headers().contains_key(*name))
        .cloned()
        .collect();
    for name in &stale {
        upstream.remove_header(name);
    }

    for name in outbound.headers().keys() {
        upstream.remove_header(name);
        for value in outbound.headers().get_all(name) {
            upstream.append_header(name.clone(), value.clone())?;
        }
    }

    Ok(())
}
