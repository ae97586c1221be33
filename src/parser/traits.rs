//! Parser trait definition

use crate::parser::types::{Found, Source};

/// Trait for extracting a version from the lines of one source file
pub trait VersionParser {
    /// The source this parser reads
    fn source(&self) -> Source;

    /// Inspect a single line; `Some` ends the scan
    fn parse_line(&self, line: &str) -> Option<Found>;
}
