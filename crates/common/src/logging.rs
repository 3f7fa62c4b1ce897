//! Tracing initialization for test binaries.
//!
//! Verbosity comes from the `ATRIUM_QA_LOG` environment variable
//! (an `EnvFilter` directive string, default `info`). Tests call
//! [`init`] at their entry point; the subscriber is installed once per
//! process since libtest offers no single main.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter for the suite.
pub const LOG_ENV: &str = "ATRIUM_QA_LOG";

static INIT: Once = Once::new();

/// Install the global tracing subscriber. Safe to call from every test.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
