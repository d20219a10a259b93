// Console reporter - one log line per test, quote-flavored summary at run end

use std::fmt::Write as _;
use std::sync::Mutex;

use console::Style;
use indexmap::IndexMap;
use rand::Rng;
use tracing::info;

use super::Reporter;
use super::quotes;
use crate::state::{FailureRecord, TestOutcome, TestStatus};

/// Console reporter
///
/// Failures are kept in insertion order until `on_end` prints the summary.
/// A second failure for the same title overwrites the first.
pub struct ConsoleReporter {
    color: bool,
    failures: Mutex<IndexMap<String, FailureRecord>>,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// Create a new console reporter with styled output
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Create a new console reporter, `color: false` disables ANSI styling
    pub fn with_color(color: bool) -> Self {
        Self {
            color,
            failures: Mutex::new(IndexMap::new()),
        }
    }

    /// Number of failures recorded so far
    pub fn failure_count(&self) -> usize {
        self.failures.lock().unwrap().len()
    }

    /// Get the recorded failure for a title
    pub fn failure(&self, title: &str) -> Option<FailureRecord> {
        self.failures.lock().unwrap().get(title).cloned()
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            Style::new().bold().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render the end-of-run summary block
    fn render_summary<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let failures = self.failures.lock().unwrap();
        let mut out = String::new();

        if !failures.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.bold("❌ Summary of Failures:"));
            for (index, (title, failure)) in failures.iter().enumerate() {
                let _ = writeln!(out);
                let _ = writeln!(out, "Failure #{}", index + 1);
                let _ = writeln!(out, "🚨 Test: {}", title);
                let _ = writeln!(out, "⏱ Time Taken: {}s", failure.time_taken);
                let _ = writeln!(out, "📜 Error Message: {}", failure.message);
                let _ = writeln!(out, "📜 Stack Trace:");
                let _ = writeln!(out, "{}", failure.stack);
            }
            let _ = writeln!(out);
            let _ = write!(out, "{}", quotes::pick(rng, quotes::FAILURE_QUOTES));
        } else {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.bold("✅ All Tests Passed:"));
            let _ = write!(out, "{}", quotes::pick(rng, quotes::SUCCESS_QUOTES));
        }

        out
    }
}

impl Reporter for ConsoleReporter {
    fn on_test_end(&self, title: &str, outcome: &TestOutcome) {
        let glyph = if outcome.status == TestStatus::Passed {
            "✅"
        } else {
            "❌"
        };

        info!(
            "{} Test Completed: {} - Status: {} - Time taken: {}s",
            glyph,
            title,
            outcome.status,
            outcome.time_taken()
        );

        if let Some(record) = FailureRecord::from_outcome(outcome) {
            self.failures
                .lock()
                .unwrap()
                .insert(title.to_string(), record);
        }
    }

    fn on_end(&self) -> anyhow::Result<()> {
        // Summary goes straight to stdout, not through the structured logger
        let mut rng = rand::rng();
        println!("{}", self.render_summary(&mut rng));

        info!("✨ All tests completed.");
        Ok(())
    }
}
