use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` records into `tracing`.
///
/// `RUST_LOG` takes precedence when set; otherwise the default level is
/// `info`, or `debug` when `VIZLAB_DEBUG` is present in the environment.
/// Safe to call more than once (tests call it per-process).
pub fn init_tracing() {
    let _ = tracing_log::LogTracer::init();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if std::env::var_os("VIZLAB_DEBUG").is_some() {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();

    tracing::debug!("logging initialized");
}
