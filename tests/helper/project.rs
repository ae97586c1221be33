//! Temporary project layout with the four version sources

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use check_version::report::run;
use check_version::version::FsSourceReader;

/// Nix recipe template; `{version}` is substituted
pub const DEFAULT_NIX: &str = r#"{ pkgs ? import <nixpkgs> {} }:

pkgs.rustPlatform.buildRustPackage rec {
  pname = "rule72";
  version = "{version}";
  src = ./.;
}
"#;

/// Changelog template; `{version}` is substituted
pub const CHANGELOG: &str = "# Changelog

## [Unreleased]

## [{version}] - 2025-06-01
- Reflow bullet lists

## [0.0.1] - 2024-01-01
- Initial release
";

/// CLI source with a hard-coded version; `{version}` is substituted
pub const MAIN_RS_LITERAL: &str = r#"use clap::Command;

fn main() {
    let matches = Command::new("rule72")
        .version("{version}")
        .about("Git commit message formatter")
        .get_matches();
}
"#;

/// CLI source forwarding the manifest version
pub const MAIN_RS_MARKER: &str = r#"use clap::Command;

fn main() {
    let matches = Command::new("rule72")
        .version(env!("CARGO_PKG_VERSION"))
        .get_matches();
}
"#;

/// Manifest for `version`
pub fn cargo_toml(version: &str) -> String {
    format!(
        r#"[package]
name = "rule72"
version = "{version}"
edition = "2021"

[dependencies]
clap = {{ version = "4.5.0" }}
"#
    )
}

/// A project root in a temporary directory
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("rule72/src")).unwrap();
        Self { dir }
    }

    /// A project where every source declares `version`
    pub fn consistent(version: &str) -> Self {
        Self::new()
            .cargo_toml(&cargo_toml(version))
            .default_nix(&DEFAULT_NIX.replace("{version}", version))
            .changelog(&CHANGELOG.replace("{version}", version))
            .main_rs(&MAIN_RS_LITERAL.replace("{version}", version))
    }

    pub fn cargo_toml(self, content: &str) -> Self {
        self.write("rule72/Cargo.toml", content)
    }

    pub fn default_nix(self, content: &str) -> Self {
        self.write("default.nix", content)
    }

    pub fn changelog(self, content: &str) -> Self {
        self.write("CHANGELOG.md", content)
    }

    pub fn main_rs(self, content: &str) -> Self {
        self.write("rule72/src/main.rs", content)
    }

    pub fn remove(self, relative: &str) -> Self {
        fs::remove_file(self.dir.path().join(relative)).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the check against this project: exit code, stdout and stderr
    pub fn check(&self) -> (u8, String, String) {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = run(&FsSourceReader::new(self.path()), &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn write(self, relative: &str, content: &str) -> Self {
        fs::write(self.dir.path().join(relative), content).unwrap();
        self
    }
}
