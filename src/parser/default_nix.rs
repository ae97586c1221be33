//! default.nix parser
//!
//! Nix derivations set `version = "X.Y.Z";` inside an attribute set, usually
//! indented or sharing a line with other attributes, so the assignment may
//! appear anywhere in the line.

use crate::parser::pattern::{Anchor, LinePattern};
use crate::parser::traits::VersionParser;
use crate::parser::types::{Found, Source};

/// Parser for the Nix packaging recipe
pub struct DefaultNixParser {
    /// Regex for `version = "1.2.3"` anywhere in a line
    version_re: LinePattern,
}

impl DefaultNixParser {
    pub fn new() -> Self {
        Self {
            version_re: LinePattern::new(r#"version\s*=\s*"{version}""#, Anchor::Anywhere),
        }
    }
}

impl Default for DefaultNixParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionParser for DefaultNixParser {
    fn source(&self) -> Source {
        Source::DefaultNix
    }

    fn parse_line(&self, line: &str) -> Option<Found> {
        self.version_re.capture(line).map(Found::Version)
    }
}
