//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "STRATUM_LOG";

/// Initialize the Stratum tracing/logging system.
///
/// Reads `STRATUM_LOG` for per-subsystem log levels.
/// Format: `STRATUM_LOG=stratum_analysis::scanner=debug,stratum_analysis::graph=trace`
///
/// Falls back to `stratum=info` if `STRATUM_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber. If another
/// subscriber is already installed globally, the call is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("stratum=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
