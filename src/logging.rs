use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `coronalog=<level>,warn`. Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coronalog={level},warn")));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .try_init()
        .is_ok();

    if initialized {
        tracing::debug!(level, "logging initialized");
    }
}
