//! Cargo.toml parser
//!
//! Takes the first `version = "X.Y.Z"` assignment that starts a line, which in
//! a package manifest is the `[package]` version.

use crate::parser::pattern::{Anchor, LinePattern};
use crate::parser::traits::VersionParser;
use crate::parser::types::{Found, Source};

/// Parser for the crate manifest
pub struct CargoTomlParser {
    /// Regex for `version = "1.2.3"`, optionally indented
    version_re: LinePattern,
}

impl CargoTomlParser {
    pub fn new() -> Self {
        Self {
            version_re: LinePattern::new(r#"\s*version\s*=\s*"{version}""#, Anchor::LineStart),
        }
    }
}

impl Default for CargoTomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionParser for CargoTomlParser {
    fn source(&self) -> Source {
        Source::CargoToml
    }

    fn parse_line(&self, line: &str) -> Option<Found> {
        self.version_re.capture(line).map(Found::Version)
    }
}
