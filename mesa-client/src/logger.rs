//! Logging setup for applications embedding the client

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a global `tracing` subscriber
///
/// `RUST_LOG` overrides `level` when set. `json_format` switches to JSON
/// lines for log shipping.
///
/// # Examples
/// ```no_run
/// mesa_client::logger::init_logger("mesa_client=debug", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    Ok(())
}
