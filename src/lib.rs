//! # Leveled Logger
//!
//! A minimal leveled console logger. Messages below the configured threshold
//! are dropped; the rest are written to standard error as one line each:
//!
//! ```text
//! [2021-06-01T08:00:00] [INFO] [server.rs:42:listen] listening on :8080
//! ```
//!
//! ## Features
//!
//! - **Five levels**: `FATAL`, `ERROR`, `WARN`, `INFO`, `DEBUG`
//! - **Call sites**: file, line and function of every log statement
//! - **Colors**: colorized tags on terminals, plain text elsewhere
//! - **Fatal exits**: `fatal!` ends the process with status 1
//!
//! ```
//! use leveled_logger::{global, info, warn};
//!
//! global::disable_timestamp();
//! info!("hello {}", "world");
//! warn!("retry {} of {}", 1, 3);
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, CallSite, ColorMode, ExitHandler, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerError, Result, Styler, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, MemoryAppender};
pub use crate::core::{
    Appender, CallSite, ColorMode, ExitHandler, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerError, Result, Styler, TimestampFormat, DEBUG_MODE_ENABLED, FATAL_EXIT_CODE,
};
