//! Call-site location of a log statement
//!
//! A `CallSite` is captured either by the logging macros (file, line and the
//! enclosing function) or by `#[track_caller]` methods (file and line only).

use std::fmt;
use std::panic::Location;

/// Rendered in place of any part of the call site that could not be resolved.
pub const UNKNOWN: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Call site of the nearest caller not marked `#[track_caller]`.
    ///
    /// The function name is not available through `Location` and stays unknown.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), "")
    }

    /// Last path segment of the source file.
    pub fn file_name(&self) -> &'static str {
        let name = self.file.rsplit(['/', '\\']).next().unwrap_or_default();
        if name.is_empty() {
            UNKNOWN
        } else {
            name
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Unqualified name of the enclosing function.
    ///
    /// Module qualifiers are dropped and closure segments skipped, so
    /// `app::server::run::{{closure}}` yields `run`.
    pub fn function_name(&self) -> &'static str {
        self.function
            .rsplit("::")
            .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
            .unwrap_or(UNKNOWN)
    }

    /// Full path as captured, without normalization.
    pub fn qualified_function(&self) -> &'static str {
        self.function
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_name(),
            self.line,
            self.function_name()
        )
    }
}

/// Strip the helper item suffix from a `type_name` taken inside a function.
#[doc(hidden)]
pub fn enclosing_function(helper_type_name: &'static str) -> &'static str {
    helper_type_name
        .strip_suffix("::__call_site")
        .unwrap_or(helper_type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        let site = CallSite::new("src/net/server.rs", 42, "app::net::server::listen");
        assert_eq!(site.file_name(), "server.rs");
        assert_eq!(site.line(), 42);

        let site = CallSite::new(r"src\win\pipe.rs", 7, "pipe");
        assert_eq!(site.file_name(), "pipe.rs");
    }

    #[test]
    fn test_function_name_drops_qualifiers() {
        let site = CallSite::new("main.rs", 1, "app::net::server::listen");
        assert_eq!(site.function_name(), "listen");

        let site = CallSite::new("main.rs", 1, "main");
        assert_eq!(site.function_name(), "main");
    }

    #[test]
    fn test_function_name_skips_closures() {
        let site = CallSite::new("main.rs", 1, "app::worker::spawn::{{closure}}::{{closure}}");
        assert_eq!(site.function_name(), "spawn");
    }

    #[test]
    fn test_unresolved_parts_render_placeholder() {
        let site = CallSite::new("", 0, "");
        assert_eq!(site.file_name(), UNKNOWN);
        assert_eq!(site.function_name(), UNKNOWN);
        assert_eq!(site.to_string(), "?:0:?");
    }

    #[test]
    fn test_caller_uses_track_caller_location() {
        let expected_line = line!() + 1;
        let site = CallSite::caller();
        assert_eq!(site.file_name(), "call_site.rs");
        assert_eq!(site.line(), expected_line);
        assert_eq!(site.function_name(), UNKNOWN);
    }

    #[test]
    fn test_enclosing_function() {
        assert_eq!(
            enclosing_function("app::handler::__call_site"),
            "app::handler"
        );
        assert_eq!(enclosing_function("app::handler"), "app::handler");
    }
}
