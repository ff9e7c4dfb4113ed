//! Process-wide logger
//!
//! The logging macros without a `logger:` argument go through the instance
//! returned by [`logger`]. It is created on first use with the defaults of
//! [`Logger::new`], unless [`init`] installed a configured one before that.
//!
//! ```
//! use leveled_logger::{global, LogLevel};
//!
//! global::set_level(LogLevel::Warn);
//! leveled_logger::info!("suppressed");
//! leveled_logger::warn!("disk at {}%", 91);
//! ```

use crate::core::{LogLevel, Logger, LoggerError, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Install `logger` as the process-wide logger.
///
/// Fails if the global logger was already installed or already used.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Hide the timestamp field on all later lines.
pub fn disable_timestamp() {
    logger().disable_timestamp();
}

/// Set the threshold to `Debug` and announce it at `Info`.
///
/// The announcement carries file and line only; `enable_debug_mode!()` also
/// names the calling function.
#[track_caller]
pub fn enable_debug_mode() {
    logger().enable_debug_mode();
}

pub fn set_level(level: LogLevel) {
    logger().set_level(level);
}

pub fn level() -> LogLevel {
    logger().level()
}
