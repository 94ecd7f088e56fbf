//! Deduplicated diagnostics
//!
//! A scan over every pixel can hit the same problem thousands of times.
//! [`Diagnostics`] keys messages by their template and keeps an
//! occurrence counter, so user-facing output grows with the number of
//! distinct problems rather than with the image size.

use std::fmt;

/// One distinct diagnostic and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    template: &'static str,
    message: String,
    count: u64,
}

impl DiagnosticEntry {
    /// Template the message was produced from.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Most recently formatted message for this template.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of occurrences.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} occurrence(s))", self.message, self.count)
    }
}

/// Template-keyed diagnostic collector, in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<DiagnosticEntry>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `template`, formatted as `message`.
    ///
    /// The first occurrence of each template is logged at warn level.
    pub fn record(&mut self, template: &'static str, message: String) -> &DiagnosticEntry {
        let index = match self.entries.iter().position(|e| e.template == template) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.count += 1;
                entry.message = message;
                i
            }
            None => {
                log::warn!("{message}");
                self.entries.push(DiagnosticEntry {
                    template,
                    message,
                    count: 1,
                });
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Distinct entries in order of first occurrence.
    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    /// Occurrences recorded for `template`.
    pub fn count_of(&self, template: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.template == template)
            .map_or(0, |e| e.count)
    }

    /// Every distinct entry joined into one message, or `None` if empty.
    pub fn summary(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
