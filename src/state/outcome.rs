// Test outcome structures

use crate::state::TestStatus;
use serde::Serialize;

/// Structured error attached to a finished test by the host runner.
/// Both fields are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestError {
    pub message: Option<String>,
    pub stack: Option<String>,
}

impl TestError {
    /// Create an error with both message and stack
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: Some(stack.into()),
        }
    }

    /// Create an error carrying only a message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: None,
        }
    }
}

/// Outcome of one finished test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration_ms: u64,
    pub errors: Vec<TestError>,
}

impl TestOutcome {
    /// Create a passed outcome
    pub fn passed(duration_ms: u64) -> Self {
        Self {
            status: TestStatus::Passed,
            duration_ms,
            errors: Vec::new(),
        }
    }

    /// Create a failed outcome
    pub fn failed(duration_ms: u64, errors: Vec<TestError>) -> Self {
        Self {
            status: TestStatus::Failed,
            duration_ms,
            errors,
        }
    }

    /// Create a skipped outcome
    pub fn skipped(duration_ms: u64) -> Self {
        Self {
            status: TestStatus::Skipped,
            duration_ms,
            errors: Vec::new(),
        }
    }

    /// Create a timed-out outcome
    pub fn timed_out(duration_ms: u64, errors: Vec<TestError>) -> Self {
        Self {
            status: TestStatus::TimedOut,
            duration_ms,
            errors,
        }
    }

    /// Elapsed seconds formatted to two decimals
    pub fn time_taken(&self) -> String {
        format!("{:.2}", self.duration_ms as f64 / 1000.0)
    }
}
