//! Bounded-retry wrapper for insertion attempts.
//!
//! The retry policy is an explicit state machine rather than bare
//! catch-and-continue control flow: "succeeded" and "exhausted" are values
//! the caller matches on, not conditions inferred from logging.
//!
//! Baseline policy: up to `max_attempts` immediate retries, no backoff, no
//! error classification - every failure of the wrapped operation consumes
//! budget. TODO: add backoff between attempts once the policy grows error
//! classification; immediate retry is kept for now for behavior parity.

use std::future::Future;

use super::domain::ConvertError;

/// Default attempt budget for one insertion.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Terminal result of a retried operation.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    /// The operation succeeded on attempt `attempts`
    Succeeded { value: T, attempts: u32 },
    /// Every attempt failed; carries the last error for diagnostics
    Exhausted {
        last_error: ConvertError,
        attempts: u32,
    },
}

/// Non-terminal state of the retry loop.
enum State {
    Attempting(u32),
}

/// Run `op` up to `max_attempts` times, returning the terminal state.
///
/// The operation is called exactly once more than the number of failures
/// that preceded a success, and never more than `max_attempts` times.
/// A `max_attempts` of zero is treated as one attempt.
pub async fn with_retry<T, F, Fut>(max_attempts: u32, mut op: F) -> RetryOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ConvertError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut state = State::Attempting(1);

    loop {
        let State::Attempting(attempt) = state;

        match op().await {
            Ok(value) => {
                return RetryOutcome::Succeeded {
                    value,
                    attempts: attempt,
                };
            }
            Err(error) if attempt < max_attempts => {
                tracing::warn!(
                    "Attempt {}/{} failed: {} - retrying",
                    attempt,
                    max_attempts,
                    error
                );
                state = State::Attempting(attempt + 1);
            }
            Err(error) => {
                tracing::warn!(
                    "Attempt {}/{} failed: {} - budget exhausted",
                    attempt,
                    max_attempts,
                    error
                );
                return RetryOutcome::Exhausted {
                    last_error: error,
                    attempts: attempt,
                };
            }
        }
    }
}
