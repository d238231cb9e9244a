//! Append-only clipboard log.

use chrono::NaiveTime;

/// Time-of-day header format used for every record.
pub const ENTRY_TIME_FORMAT: &str = "%H:%M:%S";

/// One captured clipboard value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub time: NaiveTime,
    pub text: String,
}

impl LogEntry {
    pub fn new(time: NaiveTime, text: impl Into<String>) -> Self {
        Self { time, text: text.into() }
    }

    /// Render as `\n[HH:MM:SS]\n<text>\n`.
    pub fn record(&self) -> String {
        format!("\n[{}]\n{}\n", self.time.format(ENTRY_TIME_FORMAT), self.text)
    }
}

/// Materialized text of every entry since the last clear.
///
/// Only two mutations exist: [`LogBuffer::append`] and [`LogBuffer::clear`].
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    text: String,
    entries: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return the record that was added.
    pub fn append(&mut self, entry: &LogEntry) -> String {
        let record = entry.record();
        self.text.push_str(&record);
        self.entries += 1;
        record
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.entries = 0;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The content written by a save.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Number of entries appended since the last clear.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
