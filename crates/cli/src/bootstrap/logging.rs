use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `debug` with `--debug` and `warn` without.
/// Logs go to stderr so preload output on stdout stays clean.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(level = default_level, "Logging initialized");
}
