//! Log entry structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};

/// One log event, captured at the moment a message passes the threshold.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub call_site: CallSite,
}

impl LogEntry {
    /// Capture an entry stamped with the current local time.
    ///
    /// The message is rendered eagerly. A `Display` impl that reports an error
    /// leaves whatever it wrote so far instead of failing the log call.
    pub fn new(level: LogLevel, call_site: CallSite, message: impl fmt::Display) -> Self {
        let mut rendered = String::new();
        let _ = write!(rendered, "{}", message);

        Self {
            level,
            message: rendered,
            timestamp: Local::now(),
            call_site,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_entry_renders_arguments() {
        let site = CallSite::new("main.rs", 3, "main");
        let entry = LogEntry::new(LogLevel::Info, site, format_args!("hello {}", "world"));
        assert_eq!(entry.message, "hello world");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.call_site, site);
    }

    #[test]
    fn test_failing_display_does_not_panic() {
        let entry = LogEntry::new(LogLevel::Warn, CallSite::caller(), Broken);
        assert_eq!(entry.message, "partial");
    }

    #[test]
    fn test_with_timestamp() {
        let fixed = Local.with_ymd_and_hms(2021, 6, 1, 8, 0, 0).single().expect("valid datetime");
        let entry = LogEntry::new(LogLevel::Debug, CallSite::caller(), "x").with_timestamp(fixed);
        assert_eq!(entry.timestamp, fixed);
    }
}
