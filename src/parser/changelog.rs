//! CHANGELOG.md parser
//!
//! Keep-a-Changelog style: the newest release is the first `## [X.Y.Z]`
//! heading. `## [Unreleased]` is skipped because it carries no version.

use crate::parser::pattern::{Anchor, LinePattern};
use crate::parser::traits::VersionParser;
use crate::parser::types::{Found, Source};

/// Parser for the release changelog
pub struct ChangelogParser {
    /// Regex for a release heading: `## [1.2.3]`
    heading_re: LinePattern,
}

impl ChangelogParser {
    pub fn new() -> Self {
        Self {
            heading_re: LinePattern::new(r"## \[{version}\]", Anchor::LineStart),
        }
    }
}

impl Default for ChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionParser for ChangelogParser {
    fn source(&self) -> Source {
        Source::Changelog
    }

    fn parse_line(&self, line: &str) -> Option<Found> {
        self.heading_re.capture(line).map(Found::Version)
    }
}
