//! Appender trait for the log output destination

use super::error::Result;

/// Destination of rendered log lines.
///
/// A logger owns exactly one appender. Each call receives one complete line,
/// trailing newline included, and should hand it to the underlying stream in a
/// single write.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Whether the destination is an interactive terminal.
    fn is_terminal(&self) -> bool {
        false
    }
}
