use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr.
///
/// Filtering follows `RUST_LOG` when set; the default keeps normal
/// runs quiet so log lines never mix into command output on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .init();
}
