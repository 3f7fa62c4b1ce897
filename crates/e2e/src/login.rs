//! Login-form interactions and the conditions the scenarios assert on.

use std::time::Duration;
use thirtyfour::prelude::*;
use tracing::{debug, info};

use atrium_qa_common::{poll_until, Observation, PollConfig, PollOutcome, Result};

/// Element id of the email input on the login form.
const EMAIL_FIELD: &str = "email";
/// Element id of the password input.
const PASSWORD_FIELD: &str = "password";
const SUBMIT_BUTTON: &str = "button[type=submit]";

/// Styling marker carried by login error messages.
const ERROR_MARKER: &str = ".text-red-600";
/// Panels some deployments render in place of a redirect.
const WELCOME_MARKERS: &str = ".welcome, .account-home";
/// Substring identifying the post-login URL.
const SUCCESS_URL_MARKER: &str = "dashboard";

/// How long the driver's own explicit wait polls for form elements.
/// This is the library wait primitive, not the suite's condition poller.
const FORM_WAIT: Duration = Duration::from_secs(20);
const FORM_WAIT_INTERVAL: Duration = Duration::from_millis(500);

/// Interval between condition-poller attempts.
const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// URL poll bound for the valid-credentials scenario.
const SUCCESS_POLL_ATTEMPTS: u32 = 30;
/// Error-marker poll bound for the rejected-credentials scenario.
const FAILURE_POLL_ATTEMPTS: u32 = 15;

/// True when `url` looks like the post-login landing page.
pub fn url_indicates_login(url: &str) -> bool {
    url.contains(SUCCESS_URL_MARKER)
}

/// Navigate to the login form, fill in the credentials, and submit.
///
/// Field lookups wait for visibility; the submit button must also be
/// clickable.
pub async fn submit_credentials(
    driver: &WebDriver,
    login_url: &str,
    username: &str,
    password: &str,
) -> Result<()> {
    info!("Navigating to {}", login_url);
    driver.goto(login_url).await?;

    let email = driver
        .query(By::Id(EMAIL_FIELD))
        .wait(FORM_WAIT, FORM_WAIT_INTERVAL)
        .and_displayed()
        .first()
        .await?;
    let password_input = driver
        .query(By::Id(PASSWORD_FIELD))
        .wait(FORM_WAIT, FORM_WAIT_INTERVAL)
        .and_displayed()
        .first()
        .await?;

    debug!("Filling login form as {} (password not logged)", username);
    email.send_keys(username).await?;
    password_input.send_keys(password).await?;

    let submit = driver
        .query(By::Css(SUBMIT_BUTTON))
        .wait(FORM_WAIT, FORM_WAIT_INTERVAL)
        .and_clickable()
        .first()
        .await?;
    debug!("Submitting login form");
    submit.click().await?;

    Ok(())
}

/// Wait for the browser to land on the post-login page.
///
/// Polls the current URL up to [`SUCCESS_POLL_ATTEMPTS`] times, then
/// re-checks fresh state once: URL marker OR a welcome panel present.
/// The re-check result is what callers assert on.
pub async fn login_succeeded(driver: &WebDriver) -> Result<bool> {
    let outcome = poll_until(
        PollConfig::new(SUCCESS_POLL_ATTEMPTS, POLL_INTERVAL),
        "post-login URL",
        || async move {
            let url = driver.current_url().await?;
            Ok(Observation {
                satisfied: url_indicates_login(url.as_str()),
                detail: url.to_string(),
            })
        },
    )
    .await?;
    debug!(
        "URL poll finished after {} attempt(s): {}",
        outcome.attempts_used, outcome.last_observed
    );

    let url = driver.current_url().await?;
    let welcome = driver.find_all(By::Css(WELCOME_MARKERS)).await?;
    let satisfied = url_indicates_login(url.as_str()) || !welcome.is_empty();
    info!("Login success condition: {}", satisfied);
    Ok(satisfied)
}

/// Wait for a styled error message after a rejected login.
pub async fn login_error_visible(driver: &WebDriver) -> Result<PollOutcome> {
    let outcome = poll_until(
        PollConfig::new(FAILURE_POLL_ATTEMPTS, POLL_INTERVAL),
        "login error marker",
        || async move {
            let errors = driver.find_all(By::Css(ERROR_MARKER)).await?;
            Ok(Observation {
                satisfied: !errors.is_empty(),
                detail: format!("{} error element(s)", errors.len()),
            })
        },
    )
    .await?;
    info!("Login failure error message present: {}", outcome.satisfied);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_urls_count_as_logged_in() {
        assert!(url_indicates_login("https://portal.example.com/dashboard"));
        assert!(url_indicates_login(
            "https://portal.example.com/app/dashboard?tab=home"
        ));
    }

    #[test]
    fn login_and_unrelated_urls_do_not() {
        assert!(!url_indicates_login("https://portal.example.com/login"));
        assert!(!url_indicates_login("about:blank"));
    }
}
