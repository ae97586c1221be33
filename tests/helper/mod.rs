//! Test utilities for building a project tree on disk

pub mod project;

pub use project::{CHANGELOG, DEFAULT_NIX, MAIN_RS_LITERAL, MAIN_RS_MARKER, TestProject, cargo_toml};
