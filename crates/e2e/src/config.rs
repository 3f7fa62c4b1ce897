//! Environment-driven configuration for the login scenarios.
//!
//! Every variable is optional; anything unset falls back to the
//! defaults below, which point at a local portal deployment and a
//! chromedriver on its default port.

use std::env;

const LOGIN_URL_ENV: &str = "ATRIUM_QA_LOGIN_URL";
const USERNAME_ENV: &str = "ATRIUM_QA_USERNAME";
const PASSWORD_ENV: &str = "ATRIUM_QA_PASSWORD";
const HEADLESS_ENV: &str = "ATRIUM_QA_HEADLESS";
const WEBDRIVER_ENV: &str = "ATRIUM_QA_WEBDRIVER";

/// Settings for one scenario run.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the login form under test.
    pub login_url: String,

    /// Account the valid-credentials scenario signs in with.
    pub username: String,

    /// Never logged.
    pub password: String,

    /// Run the browser without a visible window. On by default; set
    /// `ATRIUM_QA_HEADLESS` to anything other than `1` to disable.
    pub headless: bool,

    /// WebDriver endpoint of a running chromedriver.
    pub webdriver_url: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_url: env::var(LOGIN_URL_ENV).unwrap_or(defaults.login_url),
            username: env::var(USERNAME_ENV).unwrap_or(defaults.username),
            password: env::var(PASSWORD_ENV).unwrap_or(defaults.password),
            headless: env::var(HEADLESS_ENV)
                .map(|v| v == "1")
                .unwrap_or(defaults.headless),
            webdriver_url: env::var(WEBDRIVER_ENV).unwrap_or(defaults.webdriver_url),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_url: "http://localhost:8080/login".to_string(),
            username: "user@example.com".to_string(),
            password: "supersecret".to_string(),
            headless: true,
            webdriver_url: "http://localhost:9515".to_string(),
        }
    }
}
