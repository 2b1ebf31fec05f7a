//! Bounded retry with an injected sleep
//!
//! Waiting is delegated to the caller so the policy works with any timer
//! (thread sleep, test clock, host event loop).

use std::time::Duration;

/// Fixed-interval retry policy with an attempt cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait before every attempt
    pub interval: Duration,
    /// Attempts made at most
    pub max_attempts: u32,
}

/// Result of a bounded retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOutcome {
    /// Whether an attempt reported completion before the cap
    pub succeeded: bool,
    /// Number of attempts performed
    pub attempts_used: u32,
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Run `action` until it returns `true` or attempts run out
    ///
    /// `sleep` is called with the interval before every attempt. `action`
    /// receives the zero-based attempt number. Running out of attempts is
    /// reported through `succeeded = false`, never as an error.
    ///
    /// # Examples
    /// ```
    /// # use std::time::Duration;
    /// # use faqtree::discovery::RetryPolicy;
    /// let policy = RetryPolicy::new(Duration::from_millis(300), 10);
    /// let mut slept = Duration::ZERO;
    /// let outcome = policy.retry(|attempt| attempt == 2, |d| slept += d);
    /// assert!(outcome.succeeded);
    /// assert_eq!(outcome.attempts_used, 3);
    /// assert_eq!(slept, Duration::from_millis(900));
    /// ```
    pub fn retry<A, S>(&self, mut action: A, mut sleep: S) -> RetryOutcome
    where
        A: FnMut(u32) -> bool,
        S: FnMut(Duration),
    {
        for attempt in 0..self.max_attempts {
            sleep(self.interval);
            if action(attempt) {
                return RetryOutcome {
                    succeeded: true,
                    attempts_used: attempt + 1,
                };
            }
        }

        RetryOutcome {
            succeeded: false,
            attempts_used: self.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_success() {
        let policy = RetryPolicy::new(Duration::from_millis(10), 5);
        let mut sleeps = 0;
        let outcome = policy.retry(|_| true, |_| sleeps += 1);
        assert_eq!(
            outcome,
            RetryOutcome {
                succeeded: true,
                attempts_used: 1
            }
        );
        assert_eq!(sleeps, 1);
    }

    #[test]
    fn test_exhausted_attempts_not_an_error() {
        let policy = RetryPolicy::new(Duration::from_millis(10), 4);
        let mut attempts = Vec::new();
        let outcome = policy.retry(
            |attempt| {
                attempts.push(attempt);
                false
            },
            |_| {},
        );
        assert!(!outcome.succeeded);
        assert_eq!(outcome.attempts_used, 4);
        assert_eq!(attempts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_attempts() {
        let policy = RetryPolicy::new(Duration::from_millis(10), 0);
        let outcome = policy.retry(|_| panic!("must not run"), |_| panic!("must not sleep"));
        assert_eq!(outcome.attempts_used, 0);
        assert!(!outcome.succeeded);
    }
}
