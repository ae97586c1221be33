use thiserror::Error;

use crate::parser::types::Source;

/// A source did not yield a version. Either variant aborts the check.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not find version in {0}")]
    NotFound(Source),

    #[error("Could not find version in {source_file}")]
    Unreadable {
        source_file: Source,
        #[source]
        cause: std::io::Error,
    },
}

impl ExtractError {
    /// The source that failed
    pub fn source_file(&self) -> Source {
        match self {
            ExtractError::NotFound(source) => *source,
            ExtractError::Unreadable { source_file, .. } => *source_file,
        }
    }
}
