//! Progress reporting capability
//!
//! Long scans report fractional completion through [`Progress`]. Reporting
//! is advisory: implementations cannot fail or stop the algorithm.

/// Receiver for progress and status updates from a long-running scan.
pub trait Progress {
    /// Set the progress value, from 0.0 to 1.0.
    fn progress_update(&mut self, fraction: f64);

    /// Set the status text shown alongside the progress value.
    fn set_status(&mut self, _text: &str) {}

    /// Show a message that needs the user's attention.
    fn show_message(&mut self, _text: &str) {}
}

/// Progress sink that records the last reported value.
///
/// Useful for hosts that poll rather than redraw, and in tests.
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    /// Number of `progress_update` calls
    pub updates: u64,
    /// Most recent fraction
    pub last_fraction: f64,
    /// Most recent status text
    pub status: Option<String>,
    /// Every message shown, in order
    pub messages: Vec<String>,
}

impl Progress for ProgressLog {
    fn progress_update(&mut self, fraction: f64) {
        self.updates += 1;
        self.last_fraction = fraction;
    }

    fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
