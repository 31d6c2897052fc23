use tracing_subscriber::EnvFilter;

/// Respects `RUST_LOG`; defaults to info. Logs go to stderr so stdout
/// stays usable for piped output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
