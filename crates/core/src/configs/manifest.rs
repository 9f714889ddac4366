//! Package manifest parsing
//!
//! The runner is configured through the `"simply"` section of the root
//! `package.json`. Config items discovered inside the tasks tree are parsed
//! with the same structure so their dependency tables can be merged by the
//! install operation.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::SimplyResult;

/// A parsed package manifest.
///
/// Only the fields the runner cares about are modeled; everything else in
/// the file is ignored.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub simply: Option<SimplySection>,
    pub dependencies: Option<BTreeMap<String, String>>,
    pub dev_dependencies: Option<BTreeMap<String, String>>,
}

/// The `"simply"` configuration section of the manifest.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimplySection {
    /// Tasks directory, relative to the root directory.
    pub directory: Option<String>,
    pub extensions: Option<ExtensionsConfig>,
    /// Map from script extension to the interpreter program used to run it.
    pub interpreters: Option<BTreeMap<String, String>>,
}

/// Extension sets used to classify scanned entries.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtensionsConfig {
    pub binary: Option<Vec<String>>,
    pub script: Option<Vec<String>>,
    pub config: Option<Vec<String>>,
}

pub fn parse_manifest(json_str: &str) -> SimplyResult<Manifest> {
    let manifest: Manifest = serde_json::from_str(json_str)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_with_simply_section() {
        let manifest = parse_manifest(
            r#"{
                "name": "demo",
                "version": "1.0.0",
                "simply": {
                    "directory": "scripts",
                    "extensions": { "script": ["js", "py"] },
                    "interpreters": { "py": "python3" }
                },
                "dependencies": { "left-pad": "^1.3.0" }
            }"#,
        )
        .unwrap();

        let simply = manifest.simply.expect("simply section should be parsed");
        assert_eq!(simply.directory.as_deref(), Some("scripts"));
        let extensions = simply.extensions.expect("extensions should be parsed");
        assert_eq!(
            extensions.script,
            Some(vec!["js".to_string(), "py".to_string()])
        );
        assert_eq!(
            simply.interpreters.unwrap().get("py").map(String::as_str),
            Some("python3")
        );
        assert_eq!(
            manifest.dependencies.unwrap().get("left-pad").map(String::as_str),
            Some("^1.3.0")
        );
    }

    #[test]
    fn test_parse_manifest_without_simply_section() {
        let manifest = parse_manifest(r#"{ "name": "demo", "devDependencies": { "tape": "~4.0.0" } }"#)
            .unwrap();

        assert!(manifest.simply.is_none());
        assert_eq!(
            manifest.dev_dependencies.unwrap().get("tape").map(String::as_str),
            Some("~4.0.0")
        );
    }

    #[test]
    fn test_parse_manifest_rejects_invalid_json() {
        assert!(parse_manifest("{ not json").is_err());
    }
}
