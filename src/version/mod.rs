//! Version extraction and comparison
//!
//! # Modules
//!
//! - [`checker`]: Reads every source in fixed order and compares the results
//! - [`error`]: Error type for failed extractions

pub mod checker;
pub mod error;

pub use checker::{FsSourceReader, Outcome, SourceReader, VersionMap, check_versions};
pub use error::ExtractError;
