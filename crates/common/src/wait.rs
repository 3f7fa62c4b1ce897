//! Bounded condition polling against live browser state.
//!
//! The login scenarios wait for asynchronous UI state (a post-login URL,
//! an error banner) by re-probing the browser a fixed number of times
//! with a fixed delay in between. This is distinct from the driver's own
//! explicit-wait primitive, which handles per-element lookup timeouts.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::error::Result;

/// Attempt bound and inter-attempt delay for one poll invocation.
///
/// `max_attempts` must be at least 1. The interval may be zero.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Upper bound on probe evaluations.
    pub max_attempts: u32,

    /// Fixed delay between consecutive evaluations.
    pub interval: Duration,
}

impl PollConfig {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

/// Result of a single probe evaluation.
#[derive(Debug, Clone)]
pub struct Observation {
    /// Whether the awaited condition held at this evaluation.
    pub satisfied: bool,

    /// Human-readable snapshot of what was seen (current URL, element
    /// count). Logged per attempt and reported as `last_observed`.
    pub detail: String,
}

/// Result of a whole poll invocation, consumed by the caller's assertion.
#[derive(Debug, Clone)]
pub struct PollOutcome {
    pub satisfied: bool,

    /// Evaluations consumed. Equals `max_attempts` when unsatisfied.
    pub attempts_used: u32,

    /// Detail of the final evaluation.
    pub last_observed: String,
}

/// Repeatedly evaluate `probe` until it reports satisfied or
/// `config.max_attempts` evaluations have elapsed.
///
/// Stops at the first satisfying evaluation. Sleeps `config.interval`
/// between evaluations; no sleep happens after the final attempt or
/// after a satisfying one. A probe error aborts the poll immediately
/// and propagates to the caller.
///
/// `what` names the awaited condition in log output.
pub async fn poll_until<F, Fut>(config: PollConfig, what: &str, mut probe: F) -> Result<PollOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Observation>>,
{
    let mut last_observed = String::new();

    for attempt in 1..=config.max_attempts {
        let observation = probe().await?;
        debug!(
            "{}: attempt {}/{}: {}",
            what, attempt, config.max_attempts, observation.detail
        );
        last_observed = observation.detail;

        if observation.satisfied {
            return Ok(PollOutcome {
                satisfied: true,
                attempts_used: attempt,
                last_observed,
            });
        }

        if attempt < config.max_attempts {
            sleep(config.interval).await;
        }
    }

    Ok(PollOutcome {
        satisfied: false,
        attempts_used: config.max_attempts,
        last_observed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    const ONE_SECOND: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn satisfied_first_attempt_stops_without_sleeping() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let outcome = poll_until(PollConfig::new(30, ONE_SECOND), "always true", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                Ok(Observation {
                    satisfied: true,
                    detail: format!("call {}", n),
                })
            }
        })
        .await
        .unwrap();

        assert!(outcome.satisfied);
        assert_eq!(outcome.attempts_used, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn satisfied_on_third_attempt_reports_three() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let outcome = poll_until(PollConfig::new(30, ONE_SECOND), "true on third", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                Ok(Observation {
                    satisfied: n >= 3,
                    detail: format!("call {}", n),
                })
            }
        })
        .await
        .unwrap();

        assert!(outcome.satisfied);
        assert_eq!(outcome.attempts_used, 3);
        assert_eq!(outcome.last_observed, "call 3");
        // No evaluations after the satisfying one, and only the two
        // sleeps that preceded it.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_attempts_report_not_satisfied() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let outcome = poll_until(PollConfig::new(15, ONE_SECOND), "never true", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                Ok(Observation {
                    satisfied: false,
                    detail: format!("call {}", n),
                })
            }
        })
        .await
        .unwrap();

        assert!(!outcome.satisfied);
        assert_eq!(outcome.attempts_used, 15);
        assert_eq!(outcome.last_observed, "call 15");
        assert_eq!(calls.load(Ordering::SeqCst), 15);
        // 15 evaluations, 14 sleeps: none after the final attempt.
        assert_eq!(start.elapsed(), Duration::from_secs(14));
    }

    #[tokio::test(start_paused = true)]
    async fn single_attempt_never_sleeps() {
        let start = Instant::now();

        let outcome = poll_until(PollConfig::new(1, ONE_SECOND), "one shot", || async {
            Ok(Observation {
                satisfied: false,
                detail: "nothing yet".to_string(),
            })
        })
        .await
        .unwrap();

        assert!(!outcome.satisfied);
        assert_eq!(outcome.attempts_used, 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn probe_error_aborts_the_poll() {
        let calls = AtomicU32::new(0);

        let result = poll_until(PollConfig::new(30, ONE_SECOND), "fails on second", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n == 2 {
                    Err(Error::Setup("injected failure".to_string()))
                } else {
                    Ok(Observation {
                        satisfied: false,
                        detail: format!("call {}", n),
                    })
                }
            }
        })
        .await;

        assert!(matches!(result, Err(Error::Setup(_))));
        // The error ends polling; no third evaluation happens.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
