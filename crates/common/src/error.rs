//! Error types for the Atrium QA suite

use thiserror::Error;

/// Result type alias using the suite-wide Error
pub type Result<T> = std::result::Result<T, Error>;

/// Atrium QA error types
///
/// Teardown failures never surface here: a failed browser release is
/// logged and swallowed at the release site. Assertion failures go
/// through the test harness, not through this enum.
#[derive(Error, Debug)]
pub enum Error {
    /// Browser session could not be created. Fatal for the test.
    #[error("WebDriver session setup failed: {0}")]
    Setup(String),

    /// A driver command failed mid-flow (navigation, element lookup,
    /// input, URL query). Propagates uncaught.
    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}
