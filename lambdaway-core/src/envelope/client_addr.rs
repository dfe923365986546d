/// Resolve the `sourceIp` of the invocation event from the remote address.
///
/// `host:port` (or `[v6]:port`) yields the host. Anything that does not
/// split cleanly is returned unchanged.
pub fn resolve_source_ip(remote_addr: &str) -> &str {
    match split_host_port(remote_addr) {
        Some((host, _port)) => host,
        None => remote_addr,
    }
}

/// Split `host:port` into its parts.
///
/// Rules:
/// - `[host]:port` may contain colons inside the brackets
/// - otherwise exactly one colon is allowed
/// - brackets outside of the leading `[host]` form are rejected
/// - an empty port is accepted
pub fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    let last_colon = addr.rfind(':')?;

    let host = if let Some(rest) = addr.strip_prefix('[') {
        let close = rest.find(']')?;
        // "]" must sit right before the port separator. `close` is relative
        // to `rest`, which starts one byte into `addr`.
        if close + 2 != last_colon {
            return None;
        }
        &rest[..close]
    } else {
        let host = &addr[..last_colon];
        if host.contains(':') {
            // Too many colons, e.g. a bare IPv6 literal.
            return None;
        }
        host
    };

    let port = &addr[last_colon + 1..];
    if host.contains('[') || host.contains(']') || port.contains('[') || port.contains(']') {
        return None;
    }

    Some((host, port))
}
