//! Browser session lifecycle: scoped acquisition and guaranteed release.

use std::time::Duration;
use thirtyfour::prelude::*;
use tracing::{error, info, warn};

use atrium_qa_common::{Error, Result};

use crate::config::Config;

/// Page-load timeout applied to every fresh session.
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// A live browser session against the configured WebDriver endpoint.
///
/// Acquire with [`Session::start`] at the top of a scenario and call
/// [`Session::shutdown`] unconditionally once the scenario outcome has
/// been captured, so the browser is released no matter how the flow
/// ended.
pub struct Session {
    driver: WebDriver,
}

impl Session {
    /// Create a fresh browser session.
    ///
    /// A failure here is fatal for the test: it is logged with context
    /// and returned as [`Error::Setup`].
    pub async fn start(config: &Config) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }

        info!("Starting WebDriver session at {}", config.webdriver_url);
        let driver = match WebDriver::new(&config.webdriver_url, caps).await {
            Ok(driver) => driver,
            Err(e) => {
                error!(
                    "Failed to start WebDriver session at {}: {}",
                    config.webdriver_url, e
                );
                return Err(Error::Setup(e.to_string()));
            }
        };

        driver.set_page_load_timeout(PAGE_LOAD_TIMEOUT).await?;
        Ok(Self { driver })
    }

    /// The underlying driver handle.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Quit the browser session.
    ///
    /// A release failure never fails the test: it is logged at warning
    /// severity and swallowed.
    pub async fn shutdown(self) {
        info!("Releasing WebDriver session");
        if let Err(e) = self.driver.quit().await {
            warn!("Error during WebDriver quit: {}", e);
        }
    }
}
