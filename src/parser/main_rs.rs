//! main.rs parser
//!
//! The CLI either hard-codes its version in the clap builder
//! (`.version("1.2.3")`) or forwards the manifest version through
//! `env!("CARGO_PKG_VERSION")`. Whichever appears first in the file wins.

use crate::config::PACKAGE_VERSION_MARKER;
use crate::parser::pattern::{Anchor, LinePattern};
use crate::parser::traits::VersionParser;
use crate::parser::types::{Found, Source};

/// Parser for the CLI entry point
pub struct MainRsParser {
    /// Regex for a hard-coded `.version("1.2.3")` call
    literal_re: LinePattern,
}

impl MainRsParser {
    pub fn new() -> Self {
        Self {
            literal_re: LinePattern::new(r#"\.version\("{version}"\)"#, Anchor::Anywhere),
        }
    }
}

impl Default for MainRsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionParser for MainRsParser {
    fn source(&self) -> Source {
        Source::MainRs
    }

    fn parse_line(&self, line: &str) -> Option<Found> {
        if let Some(version) = self.literal_re.capture(line) {
            return Some(Found::Version(version));
        }
        line.contains(PACKAGE_VERSION_MARKER)
            .then_some(Found::PackageVersion)
    }
}
