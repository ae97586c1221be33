//! Release version consistency checker for the rule72 project.
//!
//! Reads the version declared in the crate manifest, the Nix recipe, the
//! changelog and the CLI source, and reports whether they all agree.
//!
//! # Modules
//!
//! - [`config`]: fixed source paths and project root resolution
//! - [`parser`]: line-oriented version extraction, one parser per source
//! - [`version`]: extraction orchestration, comparison and error types
//! - [`report`]: user-facing rendering of the outcome

pub mod config;
pub mod parser;
pub mod report;
pub mod version;
