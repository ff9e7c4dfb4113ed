//! Timestamp formatting for the leading field of a log line.

use chrono::{DateTime, Local};

/// strftime pattern of the default timestamp, e.g. `2021-06-01T08:00:00`.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// How the timestamp field is rendered.
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2021, 6, 1, 8, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2021-06-01T08:00:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Local time to the second: `2021-06-01T08:00:00`
    #[default]
    LocalSeconds,

    /// Custom strftime format, rendered in local time.
    ///
    /// ```
    /// use leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S%.3f".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::LocalSeconds => datetime.format(DEFAULT_TIMESTAMP_PATTERN).to_string(),
            TimestampFormat::Custom(pattern) => datetime.format(pattern).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_format() {
        let result = TimestampFormat::default().format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_custom_apache_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08/Jan/2025:10:30:45");
    }
}
