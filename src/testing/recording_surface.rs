use crate::domain::Notice;
use crate::ports::{LogSurface, Notifier};

/// Surface that remembers everything it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    records: Vec<String>,
    notices: Vec<Notice>,
    scrolls: usize,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended since the last clear.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl LogSurface for RecordingSurface {
    fn append(&mut self, record: &str) {
        self.records.push(record.to_string());
    }

    fn scroll_to_end(&mut self) {
        self.scrolls += 1;
    }

    fn clear(&mut self) {
        self.records.clear();
        self.clears += 1;
    }
}

impl Notifier for RecordingSurface {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
