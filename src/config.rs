use std::path::{Path, PathBuf};

use crate::parser::types::Source;

// =============================================================================
// Source locations (relative to the project root)
// =============================================================================

/// Package manifest of the rule72 crate
pub const CARGO_TOML_PATH: &str = "rule72/Cargo.toml";

/// Nix packaging recipe
pub const DEFAULT_NIX_PATH: &str = "default.nix";

/// Release changelog
pub const CHANGELOG_PATH: &str = "CHANGELOG.md";

/// CLI entry point of the rule72 crate
pub const MAIN_RS_PATH: &str = "rule72/src/main.rs";

/// Literal that marks the CLI version as taken from the manifest at build time
pub const PACKAGE_VERSION_MARKER: &str = r#"env!("CARGO_PKG_VERSION")"#;

/// Returns the project root the sources are resolved against.
/// The checker crate sits one directory below the project root, so the root is
/// fixed at build time and does not depend on where the tool is run from.
pub fn project_root() -> PathBuf {
    root_above(Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn root_above(manifest_dir: &Path) -> PathBuf {
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Returns the location of `source` below `root`.
pub fn source_path(root: &Path, source: Source) -> PathBuf {
    let relative = match source {
        Source::CargoToml => CARGO_TOML_PATH,
        Source::DefaultNix => DEFAULT_NIX_PATH,
        Source::Changelog => CHANGELOG_PATH,
        Source::MainRs => MAIN_RS_PATH,
    };
    root.join(relative)
}
