//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so stdout stays usable for `configure show`. The filter
//! comes from `RIPE_ATLAS_LOG` when set, otherwise from the `-v` count.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::constants::LOG_ENV;

/// Maps the number of `-v` flags to a default filter directive.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call once per process.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::new(default_directive(verbosity)),
    };

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()?;
    Ok(())
}
