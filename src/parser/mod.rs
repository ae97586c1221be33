//! Parser layer
//! - traits.rs: VersionParser trait definition
//! - types.rs: Common types (Source, VersionString, Found)
//! - pattern.rs: Line pattern matching and first-match scanning
//! - cargo_toml.rs: Cargo.toml parser
//! - default_nix.rs: default.nix parser
//! - changelog.rs: CHANGELOG.md parser
//! - main_rs.rs: CLI source parser

pub mod cargo_toml;
pub mod changelog;
pub mod default_nix;
pub mod main_rs;
pub mod pattern;
pub mod traits;
pub mod types;

pub use cargo_toml::CargoTomlParser;
pub use changelog::ChangelogParser;
pub use default_nix::DefaultNixParser;
pub use main_rs::MainRsParser;
pub use pattern::{Anchor, LinePattern, scan_first};
pub use traits::VersionParser;
pub use types::{Found, Source, VersionString};
