use http::{HeaderMap, header};
use std::collections::BTreeMap;

/// Fold a multi-valued header collection into one string per header name.
///
/// Repeated values are joined with `,` in the order they were received and
/// names are reported in canonical form (`X-Session-Id`). `Host` is left out;
/// it is reported through `domainName` instead. Names without any value never
/// show up, since `HeaderMap::keys` only yields names that hold a value.
pub fn fold_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter(|name| *name != header::HOST)
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()))
                .collect::<Vec<_>>()
                .join(",");

            (canonical_header_name(name.as_str()), joined)
        })
        .collect()
}

/// Canonical MIME form of a header name: the first letter and every letter
/// following a `-` upper case, the rest lower case.
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

/// First value of a header, or an empty string when it is absent.
pub fn first_header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}
