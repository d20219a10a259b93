// Report module - test-event sinks and the end-of-run summary

pub mod console;
pub mod quotes;

pub use console::ConsoleReporter;

use crate::state::TestOutcome;
use anyhow::Result;

/// Reporter trait
///
/// The host runner delivers events serialized: `on_test_end` once per
/// finished test, then `on_end` once after the whole run.
pub trait Reporter: Send + Sync {
    /// Called when a test finishes
    fn on_test_end(&self, title: &str, outcome: &TestOutcome);

    /// Called when the entire run finishes
    fn on_end(&self) -> Result<()>;
}
