use tracing::{info, warn};
use vigil_core::config::{VigilConfig, DEFAULT_LOG_FILTER};

mod app;
mod view;
mod window;

fn main() -> anyhow::Result<()> {
    // load config: VIGIL_CONFIG env > ~/.vigil/vigil.toml; log once tracing is up
    let config_path = std::env::var("VIGIL_CONFIG").ok();
    let loaded = VigilConfig::load(config_path.as_deref());

    let default_filter = loaded
        .as_ref()
        .map(|c| c.log.filter.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = loaded.unwrap_or_else(|e| {
        warn!("Config load failed ({}), using defaults", e);
        VigilConfig::default()
    });

    // Timers and notification dispatch run on worker threads; GTK keeps the
    // main thread. Entering the runtime lets GTK callbacks spawn onto it.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("vigil-rt")
        .enable_all()
        .build()?;
    let enter = runtime.enter();

    let notifier = vigil_notify::build_notifier(&config.notifications);
    info!(version = env!("CARGO_PKG_VERSION"), "Vigil starting");

    let scheduler = app::run(notifier)?;
    drop(enter);

    // Dropping the runtime would wait on notifications still pending dismissal.
    vigil_scheduler::shutdown_runtime(runtime, scheduler);
    Ok(())
}
