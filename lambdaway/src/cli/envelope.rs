use anyhow::{Context, Result, anyhow};
use clap::Args;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, Version};
use lambdaway_core::ctx::InboundRequest;
use lambdaway_core::device::builtin::lambda_envelope::LambdaEnvelopeDevice;

#[derive(Args, Debug)]
pub struct EnvelopeArgs {
    /// Request method
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Request target, path with an optional query string
    #[arg(long, default_value = "/")]
    pub target: String,

    /// Host header value
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Remote address of the simulated client
    #[arg(long, default_value = "127.0.0.1:50000")]
    pub remote_addr: String,

    /// Extra header, `name: value` (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

/// Print the invocation event the proxy would forward for the described request.
pub fn run(args: EnvelopeArgs) -> Result<()> {
    let request = build_request(&args)?;
    let (request_id, event) = LambdaEnvelopeDevice::default().build_event(&request);

    tracing::debug!(%request_id, route_key = %event.route_key, "envelope preview");

    let s = serde_json::to_string_pretty(&event)?;
    println!("{s}");
    Ok(())
}

fn build_request(args: &EnvelopeArgs) -> Result<InboundRequest> {
    let method = Method::from_bytes(args.method.as_bytes())
        .with_context(|| format!("invalid method '{}'", args.method))?;
    let uri: Uri = args
        .target
        .parse()
        .with_context(|| format!("invalid target '{}'", args.target))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        http::header::HOST,
        HeaderValue::from_str(&args.host).context("invalid host")?,
    );
    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        headers.append(name, value);
    }

    Ok(InboundRequest::new(
        &uri,
        &method,
        &headers,
        Version::HTTP_11,
        args.remote_addr.clone(),
    ))
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("header '{raw}' must look like 'name: value'"))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .with_context(|| format!("invalid header name in '{raw}'"))?;
    let value = HeaderValue::from_str(value.trim())
        .with_context(|| format!("invalid header value in '{raw}'"))?;

    Ok((name, value))
}
