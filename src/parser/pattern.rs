//! Line pattern matching shared by all parsers

use std::io::BufRead;

use regex::Regex;

use crate::parser::traits::VersionParser;
use crate::parser::types::{Found, VersionString};

/// Capture group for a `MAJOR.MINOR.PATCH` version
pub const VERSION_CAPTURE: &str = r"([0-9]+\.[0-9]+\.[0-9]+)";

/// Where in a line a pattern may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Only at the beginning of the line
    LineStart,
    /// Anywhere in the line
    Anywhere,
}

/// A version pattern applied to single lines.
///
/// `body` is a regex with `{version}` standing in for the version capture.
#[derive(Debug, Clone)]
pub struct LinePattern {
    re: Regex,
}

impl LinePattern {
    pub fn new(body: &str, anchor: Anchor) -> Self {
        let body = body.replace("{version}", VERSION_CAPTURE);
        let source = match anchor {
            Anchor::LineStart => format!("^{body}"),
            Anchor::Anywhere => body,
        };
        Self {
            re: Regex::new(&source).expect("version pattern must be a valid regex"),
        }
    }

    /// Returns the version captured from `line`, if the line matches
    pub fn capture(&self, line: &str) -> Option<VersionString> {
        self.re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| VersionString::new(m.as_str()))
    }
}

/// Scan `reader` line by line and return what the first matching line yields.
///
/// Reading stops at the first match. `Ok(None)` means end of input was reached
/// without a match.
pub fn scan_first<R, P>(reader: R, parser: &P) -> std::io::Result<Option<Found>>
where
    R: BufRead,
    P: VersionParser + ?Sized,
{
    for line in reader.lines() {
        if let Some(found) = parser.parse_line(&line?) {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
