//! Log output for the CLI.
//!
//! The core crate logs through the `log` facade. The subscriber installed
//! here also bridges those records, so a single `ITINERANT_LOG` filter
//! controls everything.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub(crate) const LOG_ENV: &str = "ITINERANT_LOG";
/// Filter used when `ITINERANT_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn,itinerant_core=info,itinerant_cli=info";

/// Install a stderr subscriber honouring `ITINERANT_LOG`.
///
/// Does nothing when a global subscriber is already installed.
pub(crate) fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        log::debug!("log subscriber already installed");
    }
}
