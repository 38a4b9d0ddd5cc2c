use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::app_config::AppConfig;

/// Installs the global subscriber: an `EnvFilter` built from `RUST_LOG`
/// (or the configured default) and a plain stdout formatter.
///
/// Must be called once, before any router is built.
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
