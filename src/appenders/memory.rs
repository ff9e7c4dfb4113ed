//! In-memory appender
//!
//! Keeps every rendered line in a shared buffer. Clones share the buffer, so
//! one handle can be given to a logger while another inspects what was
//! written.

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
    terminal: bool,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the buffer as a terminal, so `ColorMode::Auto` colorizes.
    #[must_use]
    pub fn as_terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    /// Lines written so far, each with its trailing newline.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All output concatenated, as it would have appeared on the stream.
    pub fn contents(&self) -> String {
        self.lines.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
