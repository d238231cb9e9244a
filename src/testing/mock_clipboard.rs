use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::domain::AppError;
use crate::ports::ClipboardReader;

/// Clipboard that replays a script of reads.
///
/// Once the script runs out, the last successful value keeps being returned,
/// like a real clipboard that nobody touches.
#[derive(Default)]
pub struct ScriptedClipboard {
    script: VecDeque<Result<String, String>>,
    last: String,
    reads: usize,
}

impl ScriptedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texts(texts: &[&str]) -> Self {
        let mut clipboard = Self::new();
        for text in texts {
            clipboard.push_text(text);
        }
        clipboard
    }

    pub fn push_text(&mut self, text: &str) {
        self.script.push_back(Ok(text.to_string()));
    }

    pub fn push_failure(&mut self, reason: &str) {
        self.script.push_back(Err(reason.to_string()));
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ClipboardReader for ScriptedClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(Ok(text)) => {
                self.last = text.clone();
                Ok(text)
            }
            Some(Err(reason)) => Err(AppError::ClipboardError(reason)),
            None => Ok(self.last.clone()),
        }
    }
}

/// Clipboard that never yields text.
#[derive(Default)]
pub struct FailingClipboard {
    reads: usize,
}

impl FailingClipboard {
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ClipboardReader for FailingClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        self.reads += 1;
        Err(AppError::ClipboardError("Mock clipboard error".to_string()))
    }
}

/// Empty clipboard whose reads take `delay` and are counted through a shared
/// counter, so a loop running on another thread can be observed.
pub struct CountingClipboard {
    reads: Arc<AtomicUsize>,
    delay: Duration,
}

impl CountingClipboard {
    pub fn new(reads: Arc<AtomicUsize>, delay: Duration) -> Self {
        Self { reads, delay }
    }
}

impl ClipboardReader for CountingClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(String::new())
    }
}
