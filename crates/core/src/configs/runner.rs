//! Runtime configuration assembled from the manifest
//!
//! [`RunnerConfig`] is built once at startup and handed to the scanner and
//! runner as an immutable value. Classification is driven entirely by the
//! extension sets carried here.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::configs::manifest::Manifest;

pub const DEFAULT_TASKS_DIR: &str = "tasks";

/// Immutable configuration consumed by the scanner and runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Directory the simply command is executed in.
    pub root_dir: PathBuf,
    /// Tasks directory, relative to the root directory.
    pub tasks_dir: String,
    /// Extensions classified as directly executable. The empty string
    /// covers extensionless executables.
    pub ext_binary: Vec<String>,
    /// Extensions classified as interpreter-run scripts.
    pub ext_script: Vec<String>,
    /// Extensions classified as config items.
    pub ext_config: Vec<String>,
    /// Map from script extension to interpreter program.
    pub interpreters: BTreeMap<String, String>,
}

impl RunnerConfig {
    /// Build the runtime configuration from a parsed manifest, falling back
    /// to the documented defaults for anything the manifest leaves out.
    pub fn from_manifest(root_dir: PathBuf, manifest: &Manifest) -> Self {
        let mut config = Self::with_defaults(root_dir);

        if let Some(simply) = &manifest.simply {
            if let Some(directory) = &simply.directory {
                config.tasks_dir = directory.clone();
            }
            if let Some(extensions) = &simply.extensions {
                if let Some(binary) = &extensions.binary {
                    config.ext_binary = binary.clone();
                }
                if let Some(script) = &extensions.script {
                    config.ext_script = script.clone();
                }
                if let Some(ext_config) = &extensions.config {
                    config.ext_config = ext_config.clone();
                }
            }
            if let Some(interpreters) = &simply.interpreters {
                config.interpreters = interpreters.clone();
            }
        }

        config
    }

    /// Default configuration rooted at the given directory.
    pub fn with_defaults(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            tasks_dir: DEFAULT_TASKS_DIR.to_string(),
            ext_binary: vec![
                String::new(),
                "sh".to_string(),
                "bat".to_string(),
                "exe".to_string(),
            ],
            ext_script: vec!["js".to_string()],
            ext_config: vec!["json".to_string()],
            interpreters: BTreeMap::from([("js".to_string(), "node".to_string())]),
        }
    }

    /// The absolute tasks root all scans start from.
    pub fn tasks_root(&self) -> PathBuf {
        self.root_dir.join(&self.tasks_dir)
    }

    /// Look up the interpreter for a script extension, case-insensitively.
    pub fn interpreter_for(&self, extension: &str) -> Option<&str> {
        self.interpreters
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
            .map(|(_, program)| program.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::manifest::parse_manifest;

    #[test]
    fn test_defaults_when_manifest_is_empty() {
        let config = RunnerConfig::from_manifest(PathBuf::from("/work"), &Manifest::default());

        assert_eq!(config.tasks_dir, "tasks");
        assert_eq!(config.tasks_root(), PathBuf::from("/work/tasks"));
        assert!(config.ext_binary.contains(&String::new()), "extensionless entries should classify as binaries");
        assert_eq!(config.ext_script, vec!["js".to_string()]);
        assert_eq!(config.ext_config, vec!["json".to_string()]);
        assert_eq!(config.interpreter_for("js"), Some("node"));
    }

    #[test]
    fn test_manifest_overrides_apply() {
        let manifest = parse_manifest(
            r#"{
                "simply": {
                    "directory": "jobs",
                    "extensions": { "script": ["py"] },
                    "interpreters": { "py": "python3" }
                }
            }"#,
        )
        .unwrap();
        let config = RunnerConfig::from_manifest(PathBuf::from("/work"), &manifest);

        assert_eq!(config.tasks_root(), PathBuf::from("/work/jobs"));
        assert_eq!(config.ext_script, vec!["py".to_string()]);
        assert_eq!(config.interpreter_for("PY"), Some("python3"));
        // Sets the manifest does not mention keep their defaults.
        assert_eq!(config.ext_config, vec!["json".to_string()]);
    }

    #[test]
    fn test_interpreter_lookup_miss() {
        let config = RunnerConfig::with_defaults(PathBuf::from("/work"));
        assert_eq!(config.interpreter_for("rb"), None);
    }
}
