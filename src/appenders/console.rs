//! Console appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::io::{IsTerminal, Write};

/// Writes log lines to the process's standard error stream.
///
/// Each line goes out through one `write_all` on the locked handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        std::io::stderr()
            .lock()
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing to stderr", e))
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn is_terminal(&self) -> bool {
        std::io::stderr().is_terminal()
    }
}
