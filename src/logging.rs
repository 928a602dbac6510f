use tracing_subscriber::EnvFilter;

/// Installs the global log subscriber.
///
/// Without `debug` the level is pinned to `info`. With `debug` the default is
/// `debug` and `RUST_LOG` may override it. Calling this twice is harmless.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
