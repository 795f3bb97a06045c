use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter
const LOG_ENV: &str = "RUST_LOG";

/// Initialize diagnostics on stderr.
///
/// Standard output carries the change log, so nothing is installed unless
/// `verbose` is set (debug level) or `RUST_LOG` asks for it.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter_layer = if verbose {
        EnvFilter::try_new("debug")?
    } else if std::env::var_os(LOG_ENV).is_some() {
        EnvFilter::try_from_default_env()?
    } else {
        return Ok(());
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Verbose mode enabled");
    Ok(())
}
