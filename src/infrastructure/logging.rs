//! Logging initialization.
//!
//! The crate itself only emits `tracing` events; embedding applications that
//! want console output can call [`init_logging`] once at startup. Log level
//! is controlled through `RUST_LOG`, defaulting to `info`.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a console subscriber with env-filter support.
///
/// Returns an error when a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
