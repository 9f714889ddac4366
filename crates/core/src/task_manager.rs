//! High-level task management interface
//!
//! This module provides the [`TaskManager`] which serves as the primary
//! entry point for the CLI. It loads the package manifest, assembles the
//! immutable runner configuration, and exposes the list, run, and install
//! operations.
//!
//! ## Example
//!
//! ```rust,no_run
//! use simply_core::task_manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> simply_core::types::SimplyResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     root_dir: PathBuf::from("."),
//! })?;
//!
//! let tasks = manager.list_tasks()?;
//! manager.run_tasks(&["build".to_string()])?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::configs::manifest::{parse_manifest, Manifest};
use crate::configs::runner::RunnerConfig;
use crate::execution::command::SystemRunner;
use crate::execution::runner::TaskRunner;
use crate::install;
use crate::results::{TaskInfo, TaskListResult};
use crate::scanner;
use crate::types::{SimplyError, SimplyResult};

const MANIFEST_FILE: &str = "package.json";

/// High-level task manager that encapsulates configuration loading and the
/// core operations
#[derive(Debug)]
pub struct TaskManager {
    pub config: RunnerConfig,
}

/// Configuration for initializing a task manager
pub struct TaskManagerConfig {
    pub root_dir: PathBuf,
}

impl TaskManager {
    /// Initialize a new task manager rooted at the given directory.
    pub fn new(config: TaskManagerConfig) -> SimplyResult<Self> {
        let manifest = Self::load_manifest(&config.root_dir)?;
        let runner_config = RunnerConfig::from_manifest(config.root_dir, &manifest);

        Ok(Self {
            config: runner_config,
        })
    }

    /// List all tasks under the tasks root, in scan order.
    pub fn list_tasks(&self) -> SimplyResult<TaskListResult> {
        let tasks = scanner::tasks(&self.config)?
            .into_iter()
            .map(TaskInfo::from)
            .collect();

        Ok(TaskListResult { tasks })
    }

    /// Run the requested tasks in order, one process at a time.
    pub fn run_tasks(&self, names: &[String]) -> SimplyResult<()> {
        let command_runner = SystemRunner;
        let runner = TaskRunner::new(&self.config, &command_runner);
        runner.run(names)
    }

    /// Install the merged dependencies declared by config items.
    pub fn install_dependencies(&self, save: bool) -> SimplyResult<()> {
        install::install_dependencies(&self.config, &SystemRunner, save)
    }

    /// Load the root manifest, falling back to defaults when absent.
    fn load_manifest(root_dir: &Path) -> SimplyResult<Manifest> {
        let manifest_path = root_dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Ok(Manifest::default());
        }

        let content = fs::read_to_string(&manifest_path)?;
        parse_manifest(&content).map_err(|e| {
            SimplyError::Config(format!(
                "Failed to parse manifest {}: {}",
                manifest_path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_tasks_on_empty_tasks_dir_is_not_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("tasks")).unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            root_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();
        let result = manager.list_tasks().unwrap();

        assert!(result.tasks.is_empty(), "an empty tasks directory should list zero tasks");
    }

    #[test]
    fn test_list_tasks_returns_nested_tasks_flat() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("tasks/build/assets")).unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            root_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();
        let result = manager.list_tasks().unwrap();

        let paths: Vec<String> = result
            .tasks
            .iter()
            .map(|task| task.relative_path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, vec!["build", "build/assets"]);
    }

    #[test]
    fn test_manifest_directory_override_is_honored() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("jobs")).unwrap();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{ "simply": { "directory": "jobs" } }"#,
        )
        .unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            root_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(manager.config.tasks_dir, "jobs");
        assert!(manager.list_tasks().unwrap().tasks.is_empty());
    }

    #[test]
    fn test_missing_manifest_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            root_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(manager.config.tasks_dir, "tasks");
    }

    #[test]
    fn test_broken_manifest_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{ not json").unwrap();

        let error = TaskManager::new(TaskManagerConfig {
            root_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap_err();

        assert!(matches!(error, SimplyError::Config(_)));
    }

    #[test]
    fn test_list_tasks_missing_tasks_root_propagates() {
        let temp_dir = tempfile::tempdir().unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            root_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();

        assert!(manager.list_tasks().is_err());
    }
}
