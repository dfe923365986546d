use anyhow::Result;
use clap::Args;
use lambdaway_core::conf::{DEFAULT_LISTEN, DEFAULT_UPSTREAM, RuntimeConfig};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Address the proxy listens on
    #[arg(long, default_value = DEFAULT_LISTEN)]
    pub listen: String,

    /// Function invocation endpoint, host:port
    #[arg(long, default_value = DEFAULT_UPSTREAM)]
    pub upstream: String,

    /// Connect to the upstream over TLS
    #[arg(long)]
    pub upstream_tls: bool,

    /// SNI sent to the upstream (defaults to the upstream host)
    #[arg(long)]
    pub upstream_sni: Option<String>,

    /// Override the number of Pingora worker threads
    #[arg(long)]
    pub threads: Option<usize>,
}

impl RunArgs {
    /// Flags used when no subcommand is given.
    pub fn defaults() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_owned(),
            upstream: DEFAULT_UPSTREAM.to_owned(),
            ..Default::default()
        }
    }
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = RuntimeConfig::new(
        &args.listen,
        &args.upstream,
        args.upstream_tls,
        args.upstream_sni,
        args.threads,
    )?;

    lambdaway_core::server::run(config)
}
