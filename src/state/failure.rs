// Failure detail deferred to the end-of-run summary

use crate::state::{TestOutcome, TestStatus};
use serde::Serialize;

/// Failure record kept per test title until the run finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub message: String,
    pub stack: String,
    pub time_taken: String,
}

impl FailureRecord {
    /// Build a record from a failed outcome.
    ///
    /// Returns `None` unless the status is `Failed` and at least one error is
    /// attached. Only the first error is kept; absent message/stack fields
    /// default to empty strings. The first literal occurrence of the message
    /// is removed from the stack and the result trimmed.
    pub fn from_outcome(outcome: &TestOutcome) -> Option<Self> {
        if outcome.status != TestStatus::Failed {
            return None;
        }
        let error = outcome.errors.first()?;

        let message = error.message.clone().unwrap_or_default();
        let stack = error.stack.clone().unwrap_or_default();
        let stack = if message.is_empty() {
            stack
        } else {
            stack.replacen(&message, "", 1)
        };

        Some(Self {
            message,
            stack: stack.trim().to_string(),
            time_taken: outcome.time_taken(),
        })
    }
}
