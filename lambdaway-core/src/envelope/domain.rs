/// Domain name and prefix as reported in `requestContext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub name: String,
    pub prefix: String,
}

/// Derive the domain name and prefix from a `Host` value.
///
/// The port suffix is cut at the first colon. A multi-label name uses its
/// first label as prefix; a single-label name is its own prefix. No further
/// validation is applied, so IPv6 literals and odd hosts pass through as-is.
pub fn split_domain(host: &str) -> DomainParts {
    let name = match host.find(':') {
        Some(idx) => &host[..idx],
        None => host,
    };

    let prefix = match name.split_once('.') {
        Some((first, _)) => first,
        None => name,
    };

    DomainParts {
        name: name.to_owned(),
        prefix: prefix.to_owned(),
    }
}
