use tracing_subscriber::EnvFilter;

/// Initialise logging for embedders. In debug mode the default level is
/// `debug`, otherwise `info`; the level can be overridden via `RUST_LOG`
/// only when debug logging is enabled.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
