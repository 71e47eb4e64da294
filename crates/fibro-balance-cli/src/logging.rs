//! stderr logging for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "FIBRO_BALANCE_LOG";

/// Install the global subscriber.
///
/// `FIBRO_BALANCE_LOG` wins over `configured`; an unparseable filter falls
/// back to `warn`.
pub fn init(configured: &str) {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| configured.to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
