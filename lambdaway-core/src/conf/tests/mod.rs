use crate::conf::{ConfigError, DEFAULT_LISTEN, DEFAULT_UPSTREAM, RuntimeConfig, UpstreamConfig};
use pretty_assertions::assert_eq;

#[test]
fn defaults_are_valid() {
    // Act
    let cfg = RuntimeConfig::new(DEFAULT_LISTEN, DEFAULT_UPSTREAM, false, None, None).unwrap();

    // Assert
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.threads, None);
    assert_eq!(
        cfg.upstream,
        UpstreamConfig {
            host: "127.0.0.1".to_owned(),
            port: 9000,
            use_tls: false,
            sni: "127.0.0.1".to_owned(),
        }
    );
}

#[test]
fn sni_defaults_to_the_upstream_host() {
    let upstream = UpstreamConfig::parse("lambda.internal:443", true, None).unwrap();

    assert_eq!(upstream.host, "lambda.internal");
    assert_eq!(upstream.port, 443);
    assert!(upstream.use_tls);
    assert_eq!(upstream.sni, "lambda.internal");
}

#[test]
fn explicit_sni_wins() {
    let upstream =
        UpstreamConfig::parse("10.1.2.3:443", true, Some("fn.example.com".to_owned())).unwrap();

    assert_eq!(upstream.sni, "fn.example.com");
}

#[test]
fn bracketed_ipv6_upstream_is_accepted() {
    let upstream = UpstreamConfig::parse("[::1]:9000", false, None).unwrap();

    assert_eq!(upstream.host, "::1");
    assert_eq!(upstream.port, 9000);
}

#[test]
fn invalid_upstreams_are_rejected() {
    for addr in ["lambda", ":9000", "host:", "host:99999", "host:port", "::1:9000"] {
        let err = UpstreamConfig::parse(addr, false, None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUpstream {
                upstream: addr.to_owned()
            },
            "{addr}"
        );
    }
}

#[test]
fn invalid_listen_is_rejected() {
    let err = RuntimeConfig::new("localhost:8080", DEFAULT_UPSTREAM, false, None, None).unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidListen {
            listen: "localhost:8080".to_owned()
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid listen address 'localhost:8080', expected ip:port"
    );
}

#[test]
fn zero_threads_is_rejected() {
    let err = RuntimeConfig::new(DEFAULT_LISTEN, DEFAULT_UPSTREAM, false, None, Some(0)).unwrap_err();

    assert_eq!(err, ConfigError::InvalidThreads);
}

#[test]
fn thread_override_is_kept() {
    let cfg = RuntimeConfig::new("127.0.0.1:3000", DEFAULT_UPSTREAM, false, None, Some(4)).unwrap();

    assert_eq!(cfg.server.threads, Some(4));
}
