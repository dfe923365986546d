//! Host configuration. The envelope device itself takes none.

mod error;
#[cfg(test)]
mod tests;

pub use error::ConfigError;

use crate::envelope::split_host_port;
use std::net::SocketAddr;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM: &str = "127.0.0.1:9000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address of the proxy, `ip:port`.
    pub listen: String,
    /// Override for Pingora worker threads.
    pub threads: Option<usize>,
}

/// The function invocation endpoint requests are forwarded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub sni: String,
}

impl RuntimeConfig {
    pub fn new(
        listen: &str,
        upstream: &str,
        use_tls: bool,
        sni: Option<String>,
        threads: Option<usize>,
    ) -> Result<Self, ConfigError> {
        listen
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListen {
                listen: listen.to_owned(),
            })?;

        if threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }

        Ok(Self {
            server: ServerConfig {
                listen: listen.to_owned(),
                threads,
            },
            upstream: UpstreamConfig::parse(upstream, use_tls, sni)?,
        })
    }
}

impl UpstreamConfig {
    /// Parse `host:port`. SNI defaults to the host.
    pub fn parse(addr: &str, use_tls: bool, sni: Option<String>) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidUpstream {
            upstream: addr.to_owned(),
        };

        let (host, port) = split_host_port(addr).ok_or_else(invalid)?;
        if host.is_empty() {
            return Err(invalid());
        }
        let port = port.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self {
            host: host.to_owned(),
            port,
            use_tls,
            sni: sni.unwrap_or_else(|| host.to_owned()),
        })
    }
}
