use crate::conf::UpstreamConfig;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::DeviceResult;
use crate::device::core::pipeline::DevicePipeline;
use crate::device::core::registry::DeviceRegistry;
use crate::proxy::{TransportFailure, apply_outbound};
use async_trait::async_trait;
use bytes::Bytes;
use http::header;
use pingora::prelude::*;
use pingora_http::{RequestHeader, ResponseHeader};

/// Gateway wraps Pingora hooks and runs the device pipeline.
///
/// Every request that makes it through the pipeline is forwarded to the
/// configured invocation endpoint with its outbound rewrite applied.
pub struct LambdaGateway {
    upstream: UpstreamConfig,
    devices: DeviceRegistry,
}

impl LambdaGateway {
    pub fn new(upstream: UpstreamConfig, devices: DeviceRegistry) -> Self {
        Self { upstream, devices }
    }

    /// Write a response produced by a device and end the exchange.
    async fn respond(&self, session: &mut Session, resp: ResponseCtx) -> Result<()> {
        let mut resp_header = ResponseHeader::build(resp.status, Some(resp.headers.len() + 1))?;
        for (name, value) in resp.headers.iter() {
            resp_header.append_header(name.clone(), value.clone())?;
        }
        resp_header.insert_header(header::CONTENT_LENGTH, resp.body.len().to_string())?;

        session
            .write_response_header(Box::new(resp_header), false)
            .await?;
        session
            .write_response_body(Some(Bytes::from(resp.body)), true)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ProxyHttp for LambdaGateway {
    type CTX = RequestCtx;

    fn new_ctx(&self) -> Self::CTX {
        RequestCtx::empty()
    }

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        let addr = (self.upstream.host.as_str(), self.upstream.port);
        let peer = HttpPeer::new(addr, self.upstream.use_tls, self.upstream.sni.clone());
        Ok(Box::new(peer))
    }

    /// ACCEPT → SNAPSHOT → DEVICES → (RESPOND | PROXY)
    async fn request_filter(&self, session: &mut Session, ctx: &mut Self::CTX) -> Result<bool> {
        ctx.hydrate_from_session(session);

        match DevicePipeline::run_on_request(self.devices.all(), ctx) {
            DeviceResult::Continue => Ok(false),

            DeviceResult::Respond(resp) => {
                self.respond(session, resp).await?;
                Ok(true)
            }
        }
    }

    /// Lambdaway rewrite --> Pingora `upstream_request_filter`
    ///
    /// Intent:
    /// APPLY THE OUTBOUND REQUEST
    async fn upstream_request_filter(
        &self,
        _session: &mut Session,
        upstream: &mut RequestHeader,
        ctx: &mut Self::CTX,
    ) -> Result<()> {
        let outbound = ctx
            .outbound()
            .ok_or_else(|| Error::new(Custom("no outbound request for upstream")))?;

        apply_outbound(outbound, upstream)
    }

    /// The client body is never forwarded. The envelope replaces it and is
    /// written when the client body ends, on every upstream attempt.
    async fn request_body_filter(
        &self,
        _session: &mut Session,
        body: &mut Option<Bytes>,
        end_of_stream: bool,
        ctx: &mut Self::CTX,
    ) -> Result<()>
    where
        Self::CTX: Send + Sync,
    {
        *body = if end_of_stream {
            ctx.outbound_body()
        } else {
            None
        };

        Ok(())
    }

    async fn logging(&self, session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        if !ctx.hydrated {
            return;
        }

        let status = session
            .response_written()
            .map(|resp| resp.status.as_u16())
            .unwrap_or_default();
        let request_id = ctx.request_id().unwrap_or_default();
        let request = ctx.inbound();

        match e {
            Some(err) => tracing::warn!(
                request_id = %request_id,
                method = %request.method(),
                path = request.path(),
                status,
                failure = TransportFailure::of(err).as_str(),
                error = %err,
                "invocation failed"
            ),
            None => tracing::info!(
                request_id = %request_id,
                method = %request.method(),
                path = request.path(),
                status,
                "invocation completed"
            ),
        }
    }
}
