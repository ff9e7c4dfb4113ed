//! Logging macros with call-site capture.
//!
//! Every macro records the file, line and enclosing function of its
//! invocation and takes `format!`-style arguments. Without a `logger:`
//! argument they log through the process-wide logger.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! // Process-wide logger
//! info!("Server started");
//!
//! // An explicit logger
//! let logger = Logger::builder().appender(MemoryAppender::new()).build();
//! let port = 8080;
//! info!(logger: logger, "Server listening on port {}", port);
//! ```

/// Capture the [`CallSite`](crate::CallSite) of the invocation.
///
/// ```
/// fn handler() -> leveled_logger::CallSite {
///     leveled_logger::call_site!()
/// }
///
/// assert_eq!(handler().function_name(), "handler");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __call_site() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(
            ::std::file!(),
            ::std::line!(),
            $crate::core::call_site::enclosing_function(__type_name_of(__call_site)),
        )
    }};
}

/// Log a message at a given level.
///
/// Never terminates the process, not even at `LogLevel::Fatal`; use
/// [`fatal!`](crate::fatal) for that.
///
/// ```
/// # use leveled_logger::prelude::*;
/// use leveled_logger::log;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// log!(LogLevel::Info, "Simple message");
/// log!(logger: logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::call_site!(), ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::global::logger(), $level, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// ```
/// use leveled_logger::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// use leveled_logger::error;
/// error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's exit handler with status 1.
///
/// With the default handler the process exits and the macro never returns.
///
/// ```no_run
/// use leveled_logger::fatal;
/// fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatal_at($crate::call_site!(), ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatal!(logger: $crate::global::logger(), $($arg)+)
    };
}

/// Lower the threshold to `Debug` and announce it from the invocation's call site.
///
/// ```
/// # use leveled_logger::prelude::*;
/// use leveled_logger::enable_debug_mode;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// enable_debug_mode!(logger: logger);
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
#[macro_export]
macro_rules! enable_debug_mode {
    (logger: $logger:expr) => {
        $logger.enable_debug_mode_at($crate::call_site!())
    };
    () => {
        $crate::enable_debug_mode!(logger: $crate::global::logger())
    };
}
