use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the `color_eyre` report handler and a global subscriber that
/// honours `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() -> Result<()> {
    color_eyre::install()?;

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().compact())
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
