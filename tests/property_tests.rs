//! Property-based tests for leveled_logger using proptest

use leveled_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    proptest::sample::select(LogLevel::ALL.to_vec())
}

fn quiet_logger(threshold: LogLevel, show_timestamp: bool) -> (Logger, MemoryAppender) {
    let capture = MemoryAppender::new();
    let logger = Logger::builder()
        .min_level(threshold)
        .show_timestamp(show_timestamp)
        .color_mode(ColorMode::Never)
        .appender(capture.clone())
        .exit_handler(|_| {})
        .build();
    (logger, capture)
}

proptest! {
    /// A message is emitted iff its ordinal does not exceed the threshold's
    #[test]
    fn test_emission_follows_ordinals(level in any_level(), threshold in any_level()) {
        let (logger, capture) = quiet_logger(threshold, true);

        match level {
            LogLevel::Fatal => logger.fatal("probe"),
            LogLevel::Error => logger.error("probe"),
            LogLevel::Warn => logger.warn("probe"),
            LogLevel::Info => logger.info("probe"),
            LogLevel::Debug => logger.debug("probe"),
        }

        let expected = usize::from(level.ordinal() <= threshold.ordinal());
        prop_assert_eq!(capture.len(), expected);
    }

    /// Fatal is written at every threshold
    #[test]
    fn test_fatal_always_emitted(threshold in any_level()) {
        let (logger, capture) = quiet_logger(threshold, false);
        logger.fatal("end");
        prop_assert_eq!(capture.len(), 1);
        prop_assert!(capture.contents().starts_with("[FATAL] "));
    }

    /// Level names parse back case-insensitively
    #[test]
    fn test_level_name_parses_back(level in any_level(), lower in any::<bool>()) {
        let name = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        let parsed: LogLevel = name.parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Ordinal conversion agrees with the declared ordering
    #[test]
    fn test_ordinal_matches_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.ordinal() <= b.ordinal());
        prop_assert_eq!(LogLevel::try_from(a.ordinal()).unwrap(), a);
    }

    /// Messages come out verbatim after the bracketed groups
    #[test]
    fn test_message_is_verbatim(message in "[a-zA-Z0-9 =:,.%{}-]{0,64}", show_timestamp in any::<bool>()) {
        let (logger, capture) = quiet_logger(LogLevel::Debug, show_timestamp);
        logger.info(&message);
        let contents = capture.contents();
        let expected_tail = format!("] {}\n", message);
        prop_assert!(contents.ends_with(&expected_tail));
    }
}
