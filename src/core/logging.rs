//! Log setup for the replay tool. `RUST_LOG` overrides the configured
//! level when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // Targets are noise in a single-crate CLI; the transcript output
    // matters more than module paths.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();

    tracing::info!("Logging initialized at level: {}", log_level);
}
