//! Diagnostic logging to stderr.
//!
//! Quiet by default (`warn`). `RUST_LOG` overrides the filter:
//! ```bash
//! RUST_LOG=dive=debug dive
//! RUST_LOG=dive::interpreter=trace dive
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .init();
    });
}
