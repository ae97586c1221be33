//! Version extraction and comparison across sources

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use indexmap::IndexMap;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::config::source_path;
use crate::parser::pattern::scan_first;
use crate::parser::traits::VersionParser;
use crate::parser::types::{Found, Source, VersionString};
use crate::parser::{CargoTomlParser, ChangelogParser, DefaultNixParser, MainRsParser};
use crate::version::error::ExtractError;

/// Trait for opening the file behind a source
#[cfg_attr(test, automock)]
pub trait SourceReader {
    fn open(&self, source: Source) -> std::io::Result<Box<dyn BufRead>>;
}

/// Reads sources from the filesystem below a project root
#[derive(Debug, Clone)]
pub struct FsSourceReader {
    root: PathBuf,
}

impl FsSourceReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceReader for FsSourceReader {
    fn open(&self, source: Source) -> std::io::Result<Box<dyn BufRead>> {
        let path = source_path(&self.root, source);
        debug!("Opening {:?}", path);
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Versions keyed by source, in extraction order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    versions: IndexMap<Source, VersionString>,
}

impl VersionMap {
    pub(crate) fn insert(&mut self, source: Source, version: VersionString) {
        self.versions.insert(source, version);
    }

    pub fn get(&self, source: Source) -> Option<&VersionString> {
        self.versions.get(&source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Source, &VersionString)> {
        self.versions.iter().map(|(source, version)| (*source, version))
    }

    /// True when every source holds the identical version string
    pub fn is_consistent(&self) -> bool {
        let mut values = self.versions.values();
        match values.next() {
            Some(first) => values.all(|version| version == first),
            None => true,
        }
    }
}

impl FromIterator<(Source, VersionString)> for VersionMap {
    fn from_iter<T: IntoIterator<Item = (Source, VersionString)>>(iter: T) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}

/// Result of comparing all sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All sources agree on this version
    Consistent(VersionString),
    /// At least two sources disagree
    Mismatch(VersionMap),
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Consistent(_) => 0,
            Outcome::Mismatch(_) => 1,
        }
    }
}

fn parsers() -> [Box<dyn VersionParser>; 4] {
    [
        Box::new(CargoTomlParser::new()),
        Box::new(DefaultNixParser::new()),
        Box::new(ChangelogParser::new()),
        Box::new(MainRsParser::new()),
    ]
}

/// Extract the version of every source in fixed order.
///
/// Stops at the first source without a version; later sources are not opened.
pub fn extract_versions<R: SourceReader + ?Sized>(reader: &R) -> Result<VersionMap, ExtractError> {
    let mut versions = VersionMap::default();

    for parser in parsers() {
        let source = parser.source();
        let version = match extract(reader, parser.as_ref())? {
            Found::Version(version) => version,
            Found::PackageVersion => {
                let manifest = versions
                    .get(Source::CargoToml)
                    .cloned()
                    .ok_or(ExtractError::NotFound(source))?;
                debug!("{} uses the package version {}", source, manifest);
                manifest
            }
        };
        debug!("Extracted version {} from {}", version, source);
        versions.insert(source, version);
    }

    Ok(versions)
}

fn extract<R, P>(reader: &R, parser: &P) -> Result<Found, ExtractError>
where
    R: SourceReader + ?Sized,
    P: VersionParser + ?Sized,
{
    let source = parser.source();
    let unreadable = |cause: std::io::Error| {
        debug!("Failed to read {}: {}", source, cause);
        ExtractError::Unreadable {
            source_file: source,
            cause,
        }
    };

    let input = reader.open(source).map_err(unreadable)?;
    scan_first(input, parser)
        .map_err(unreadable)?
        .ok_or(ExtractError::NotFound(source))
}

/// Extract all versions and compare them
pub fn check_versions<R: SourceReader + ?Sized>(reader: &R) -> Result<Outcome, ExtractError> {
    let versions = extract_versions(reader)?;

    let common = versions
        .is_consistent()
        .then(|| versions.get(Source::CargoToml).cloned())
        .flatten();

    match common {
        Some(version) => Ok(Outcome::Consistent(version)),
        None => Ok(Outcome::Mismatch(versions)),
    }
}
