//! Configuration module
//!
//! This module handles parsing of the package manifest and assembly of the
//! immutable runtime configuration consumed by the scanner and runner.

pub mod manifest;
pub mod runner;

pub use manifest::{parse_manifest, Manifest};
pub use runner::RunnerConfig;
