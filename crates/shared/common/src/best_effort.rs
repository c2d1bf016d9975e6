//! Best-effort calls.
//!
//! A best-effort call is a side-effecting dependency call whose outcome is
//! recorded but never allowed to abort the enclosing operation.

use std::fmt::Display;
use std::future::Future;

use tracing::warn;

/// Recorded outcome of a best-effort call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub succeeded: bool,
    /// Failure description when the call did not succeed
    pub error: Option<String>,
}

impl Attempt {
    pub fn success() -> Self {
        Self {
            succeeded: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error: Some(error.into()),
        }
    }
}

/// Run `call` once and record its outcome. Errors are logged, never returned.
pub async fn best_effort<F, T, E>(operation: &str, call: F) -> Attempt
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match call.await {
        Ok(_) => Attempt::success(),
        Err(e) => {
            warn!(operation, error = %e, "Best-effort call failed");
            Attempt::failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_is_recorded() {
        let attempt = best_effort("noop", async { Ok::<_, String>(42) }).await;
        assert_eq!(attempt, Attempt::success());
    }

    #[tokio::test]
    async fn failure_is_recorded_not_raised() {
        let attempt = best_effort("notify", async { Err::<(), _>("connection refused") }).await;
        assert!(!attempt.succeeded);
        assert_eq!(attempt.error.as_deref(), Some("connection refused"));
    }
}
