use crate::ctx::{InboundRequest, RequestId};
use crate::envelope::{
    InvocationTime, first_header_value, fold_headers, resolve_source_ip, split_domain,
};
use serde::Serialize;
use std::collections::BTreeMap;

pub const EVENT_VERSION: &str = "2.0";
pub const EVENT_TYPE: &str = "REQUEST";

/// Value used for `accountId`, `apiId` and `stage`.
pub const LOCAL_PLACEHOLDER: &str = "local";

pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Lambda HTTP API (payload format 2.0) request event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub route_key: String,
    pub raw_path: String,
    pub raw_query_string: String,
    pub headers: BTreeMap<String, String>,
    pub request_context: RequestContext,
    pub body: String,
    pub is_base64_encoded: bool,
    pub identity_source: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub account_id: String,
    pub api_id: String,
    pub domain_name: String,
    pub domain_prefix: String,
    pub http: HttpContext,
    pub request_id: String,
    pub route_key: String,
    pub stage: String,
    pub time: String,
    pub time_epoch: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpContext {
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub source_ip: String,
    pub user_agent: String,
}

impl InvocationEvent {
    /// Build the event for `request`.
    ///
    /// `request` is the snapshot taken before any upstream rewrite, so the
    /// method and path seen here are always the ones the client sent.
    pub fn assemble(
        request: &InboundRequest,
        request_id: &RequestId,
        time: &InvocationTime,
    ) -> Self {
        let method = request.method().as_str();
        let path = request.path();
        let route_key = format!("{method} {path}");
        let domain = split_domain(request.host());

        let session_id = first_header_value(request.headers(), SESSION_ID_HEADER);
        let identity_source = if session_id.is_empty() {
            Vec::new()
        } else {
            vec![session_id]
        };

        Self {
            version: EVENT_VERSION.to_owned(),
            kind: EVENT_TYPE.to_owned(),
            route_key: route_key.clone(),
            raw_path: path.to_owned(),
            raw_query_string: request.raw_query().to_owned(),
            headers: fold_headers(request.headers()),
            request_context: RequestContext {
                account_id: LOCAL_PLACEHOLDER.to_owned(),
                api_id: LOCAL_PLACEHOLDER.to_owned(),
                domain_name: domain.name,
                domain_prefix: domain.prefix,
                http: HttpContext {
                    method: method.to_owned(),
                    path: path.to_owned(),
                    protocol: request.protocol().to_owned(),
                    source_ip: resolve_source_ip(request.remote_addr()).to_owned(),
                    user_agent: first_header_value(request.headers(), "user-agent"),
                },
                request_id: request_id.as_str().to_owned(),
                route_key,
                stage: LOCAL_PLACEHOLDER.to_owned(),
                time: time.rfc3339(),
                time_epoch: time.epoch_millis(),
            },
            body: String::new(),
            is_base64_encoded: false,
            identity_source,
        }
    }
}
