/// Logging bootstrap
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the consuming shell
///
/// `RUST_LOG` wins when set; `default_level` applies to this crate
/// otherwise. Call once at startup.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("cutecats={}", default_level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
