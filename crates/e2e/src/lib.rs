//! Browser-driven login scenarios for the Atrium portal.
//!
//! This crate is glue over the `thirtyfour` WebDriver client: session
//! lifecycle with guaranteed release, environment-driven configuration,
//! and the login-form interactions driven by the scenarios in
//! `tests/login.rs`. The only owned decision logic, bounded condition
//! polling against live browser state, lives in `atrium-qa-common`.
//!
//! The scenarios need a running WebDriver endpoint (chromedriver) and a
//! reachable portal deployment, both configured through `ATRIUM_QA_*`
//! environment variables; see [`config::Config`].

pub mod config;
pub mod login;
pub mod session;

pub use config::Config;
pub use session::Session;
