//! Logging setup
//!
//! Console logging via `tracing`, filterable with `RUST_LOG`. The desk
//! is a single-user tool so there is no file rotation or shipping; the
//! terminal is the log sink.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;

    Ok(())
}
