//! Atrium QA Common Library
//!
//! Shared primitives for the Atrium QA suite: the bounded condition
//! poller used by the login scenarios, the suite-wide error taxonomy,
//! and tracing initialization for test binaries.

pub mod error;
pub mod logging;
pub mod wait;

// Re-export commonly used types
pub use error::{Error, Result};
pub use wait::{poll_until, Observation, PollConfig, PollOutcome};

/// Atrium QA version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
