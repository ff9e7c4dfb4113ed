//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod style;
pub mod timestamp;

pub use appender::Appender;
pub use call_site::CallSite;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{ExitHandler, Logger, LoggerBuilder, DEBUG_MODE_ENABLED, FATAL_EXIT_CODE};
pub use style::{ColorMode, Styler};
pub use timestamp::{TimestampFormat, DEFAULT_TIMESTAMP_PATTERN};
