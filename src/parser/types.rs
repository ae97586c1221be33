//! Common types for parsers

use std::fmt;

/// A file the version is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// rule72/Cargo.toml
    CargoToml,
    /// default.nix
    DefaultNix,
    /// CHANGELOG.md
    Changelog,
    /// rule72/src/main.rs
    MainRs,
}

impl Source {
    /// Every source in extraction and reporting order
    pub const ALL: [Source; 4] = [
        Source::CargoToml,
        Source::DefaultNix,
        Source::Changelog,
        Source::MainRs,
    ];

    /// Returns the label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Source::CargoToml => "Cargo.toml",
            Source::DefaultNix => "default.nix",
            Source::Changelog => "CHANGELOG.md",
            Source::MainRs => "main.rs",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `MAJOR.MINOR.PATCH` string captured from a source.
///
/// Compared as an opaque string: `1.0.0` and `1.00.0` are different versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString(String);

impl VersionString {
    pub(crate) fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for VersionString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a matching line yielded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A version literal written in the file
    Version(VersionString),
    /// A reference to the manifest's own version
    PackageVersion,
}
