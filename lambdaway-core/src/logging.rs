use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding Lambdaway's log directives. `RUST_LOG` is
/// consulted when it is unset.
pub const LOG_ENV: &str = "LAMBDAWAY_LOG";

/// Request logs at `info`, Pingora internals only when they warn.
pub const DEFAULT_LOG_FILTER: &str = "info,pingora=warn";

/// Install the JSON subscriber, one flattened object per event.
pub fn init_logging() {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .json()
        .flatten_event(true)
        .init();
}

/// Unparseable directives fall back to [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
