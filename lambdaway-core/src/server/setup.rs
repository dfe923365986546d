use crate::conf::RuntimeConfig;
use crate::device::core::registry::DeviceRegistry;
use crate::proxy::LambdaGateway;
use anyhow::{Context, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;

/// Run the Pingora server with the given configuration.
pub fn run(config: RuntimeConfig) -> Result<()> {
    let server = build_pingora_server(&config)?;

    tracing::info!(
        listen = %config.server.listen,
        upstream_host = %config.upstream.host,
        upstream_port = config.upstream.port,
        upstream_tls = config.upstream.use_tls,
        "lambdaway started"
    );

    // run_forever blocks the main thread as intended
    server.run_forever();
}

/// Build the Pingora server.
pub fn build_pingora_server(config: &RuntimeConfig) -> Result<Server> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf =
            ServerConf::new().context("could not construct pingora server configuration")?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let registry = DeviceRegistry::with_builtins();
    tracing::debug!("Loaded device count = {}", registry.all().len());

    let gateway = LambdaGateway::new(config.upstream.clone(), registry);

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);
    server.add_service(svc);

    Ok(server)
}
