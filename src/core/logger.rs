//! Main logger implementation

use super::{
    appender::Appender,
    call_site::CallSite,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    style::{ColorMode, Styler, CALL_SITE_COLOR, TIMESTAMP_COLOR},
    timestamp::TimestampFormat,
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Exit status passed to the exit handler by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Action run after an emitted fatal message has been written.
///
/// The parameter is the exit status. The default handler calls
/// [`std::process::exit`]; tests install one that records the status instead.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Message emitted by [`Logger::enable_debug_mode`].
pub const DEBUG_MODE_ENABLED: &str = "Debug mode enabled";

fn process_exit_handler() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

/// Leveled logger writing one line per message to a single appender.
///
/// All operations take `&self`, so a logger can be shared between threads or
/// stored in a `static`. Writes to the appender are serialized, which keeps
/// every rendered line whole.
pub struct Logger {
    min_level: RwLock<LogLevel>,
    show_timestamp: AtomicBool,
    color_mode: RwLock<ColorMode>,
    timestamp_format: TimestampFormat,
    appender: Mutex<Box<dyn Appender>>,
    exit_handler: RwLock<ExitHandler>,
    failed_writes: AtomicU64,
}

impl Logger {
    /// Logger at `Info`, with timestamps, writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level())
    }

    /// Drop the timestamp field from every subsequent line.
    pub fn disable_timestamp(&self) {
        self.show_timestamp.store(false, Ordering::Relaxed);
    }

    pub fn enable_timestamp(&self) {
        self.show_timestamp.store(true, Ordering::Relaxed);
    }

    pub fn timestamps_enabled(&self) -> bool {
        self.show_timestamp.load(Ordering::Relaxed)
    }

    /// Lower the threshold to `Debug` and announce it with an `Info` line.
    ///
    /// The announcement is checked against the new threshold, so it is always
    /// written whatever the previous level was.
    #[track_caller]
    pub fn enable_debug_mode(&self) {
        self.enable_debug_mode_at(CallSite::caller());
    }

    /// [`Logger::enable_debug_mode`] with the announcement attributed to `call_site`.
    pub fn enable_debug_mode_at(&self, call_site: CallSite) {
        self.set_level(LogLevel::Debug);
        self.log_at(LogLevel::Info, call_site, DEBUG_MODE_ENABLED);
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        *self.color_mode.write() = mode;
    }

    pub fn color_mode(&self) -> ColorMode {
        *self.color_mode.read()
    }

    /// Replace the output destination.
    pub fn set_appender(&self, appender: Box<dyn Appender>) {
        *self.appender.lock() = appender;
    }

    pub fn set_exit_handler(&self, handler: ExitHandler) {
        *self.exit_handler.write() = handler;
    }

    /// Number of lines the appender failed to write.
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.log_at(level, CallSite::caller(), message);
    }

    /// Write `message` at `level` if it passes the threshold.
    ///
    /// This never terminates the process, even for `LogLevel::Fatal`; use
    /// [`Logger::fatal_at`] for that.
    pub fn log_at(&self, level: LogLevel, call_site: CallSite, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }

        self.write_entry(&LogEntry::new(level, call_site, message));
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Debug, CallSite::caller(), message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Info, CallSite::caller(), message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Warn, CallSite::caller(), message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Error, CallSite::caller(), message);
    }

    /// Write a `Fatal` line, then run the exit handler with status 1.
    ///
    /// With the default handler the process terminates and this call never
    /// returns. If the threshold suppresses the line, the handler is not run.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.fatal_at(CallSite::caller(), message);
    }

    pub fn fatal_at(&self, call_site: CallSite, message: impl fmt::Display) {
        if !self.is_enabled(LogLevel::Fatal) {
            return;
        }

        self.write_entry(&LogEntry::new(LogLevel::Fatal, call_site, message));
        let _ = self.flush();

        let handler = self.exit_handler.read().clone();
        handler(FATAL_EXIT_CODE);
    }

    /// Render `entry` as one line, trailing newline included.
    ///
    /// Layout: `[timestamp] [LEVEL] [file:line:function] message`, with the
    /// timestamp group left out when timestamps are disabled.
    pub fn render(&self, entry: &LogEntry, styler: Styler) -> String {
        let mut line = String::with_capacity(64 + entry.message.len());

        if self.timestamps_enabled() {
            let timestamp = self.timestamp_format.format(&entry.timestamp);
            let _ = write!(line, "[{}] ", styler.paint(&timestamp, TIMESTAMP_COLOR));
        }

        let _ = write!(
            line,
            "[{}] ",
            styler.paint(entry.level.to_str(), entry.level.color_code())
        );

        let site = &entry.call_site;
        let _ = write!(
            line,
            "[{}:{}:{}] ",
            styler.paint(site.file_name(), CALL_SITE_COLOR),
            site.line(),
            styler.paint(site.function_name(), CALL_SITE_COLOR)
        );

        line.push_str(&entry.message);
        line.push('\n');
        line
    }

    fn write_entry(&self, entry: &LogEntry) {
        let mut appender = self.appender.lock();
        let styler = self.color_mode().styler(appender.is_terminal());
        let line = self.render(entry, styler);

        if appender.append(&line).is_err() {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.level())
            .field("show_timestamp", &self.timestamps_enabled())
            .field("color_mode", &self.color_mode())
            .field("timestamp_format", &self.timestamp_format)
            .field("appender", &self.appender.lock().name())
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`Logger`].
///
/// # Example
///
/// ```
/// use leveled_logger::{ColorMode, LogLevel, Logger, MemoryAppender};
///
/// let capture = MemoryAppender::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .show_timestamp(false)
///     .color_mode(ColorMode::Never)
///     .appender(capture.clone())
///     .build();
///
/// logger.debug("ready");
/// assert!(capture.contents().starts_with("[DEBUG] "));
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    show_timestamp: bool,
    color_mode: ColorMode,
    timestamp_format: TimestampFormat,
    appender: Option<Box<dyn Appender>>,
    exit_handler: Option<ExitHandler>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::default(),
            show_timestamp: true,
            color_mode: ColorMode::default(),
            timestamp_format: TimestampFormat::default(),
            appender: None,
            exit_handler: None,
        }
    }

    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Output destination; stderr when not set.
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Action run by `fatal`; `std::process::exit` when not set.
    #[must_use]
    pub fn exit_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit_handler = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));

        Logger {
            min_level: RwLock::new(self.min_level),
            show_timestamp: AtomicBool::new(self.show_timestamp),
            color_mode: RwLock::new(self.color_mode),
            timestamp_format: self.timestamp_format,
            appender: Mutex::new(appender),
            exit_handler: RwLock::new(self.exit_handler.unwrap_or_else(process_exit_handler)),
            failed_writes: AtomicU64::new(0),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
