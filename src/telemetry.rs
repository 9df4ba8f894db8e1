use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Called once by the hosting
/// binary; library code only emits through `tracing` macros.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salonbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
