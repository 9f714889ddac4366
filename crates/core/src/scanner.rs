//! Tasks-directory scanner
//!
//! This module performs the recursive, read-only walk of the tasks
//! directory. Every entry is classified from its filesystem metadata and
//! extension; task directories are flattened into the result in pre-order,
//! parent before children. The scanner never sorts: sibling order is
//! whatever the filesystem listing yields.

use std::fs;
use std::path::{Path, PathBuf};

use crate::configs::runner::RunnerConfig;
use crate::types::SimplyResult;

/// Entries whose name starts with this marker are excluded from every scan.
const HIDDEN_MARKER: char = '.';

/// Classification assigned to a discovered filesystem entry.
///
/// Entries that are not directories and match no configured extension set
/// have no kind and are excluded from scan results entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A subdirectory; both a grouping unit and a runnable unit.
    Task,
    /// A file run through a configured interpreter.
    Script,
    /// A file executed directly as a command.
    Binary,
    /// A data file consumed by the install operation, never executed.
    Config,
}

/// One filesystem entry discovered during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Path relative to the tasks root.
    pub relative_path: PathBuf,
    /// Fully resolved filesystem path.
    pub absolute_path: PathBuf,
    pub kind: ItemKind,
}

/// Classify an entry from its metadata and extension.
///
/// Pure function of (is-directory, extension, configured extension sets):
/// directories always classify as tasks, the extension sets are consulted
/// in binary, script, config order. Extension matching ignores case.
pub fn classify(is_dir: bool, extension: &str, config: &RunnerConfig) -> Option<ItemKind> {
    if is_dir {
        return Some(ItemKind::Task);
    }

    let matches = |set: &[String]| set.iter().any(|ext| ext.eq_ignore_ascii_case(extension));

    if matches(&config.ext_binary) {
        Some(ItemKind::Binary)
    } else if matches(&config.ext_script) {
        Some(ItemKind::Script)
    } else if matches(&config.ext_config) {
        Some(ItemKind::Config)
    } else {
        None
    }
}

/// Scan the tasks directory at `subpath`, returning items in pre-order.
///
/// The walk recurses into every task directory it encounters and appends
/// the transitive contents immediately after the parent item. Hidden
/// entries are neither listed nor recursed into. A missing or unreadable
/// directory propagates as an IO error.
pub fn scan(config: &RunnerConfig, subpath: &Path) -> SimplyResult<Vec<Item>> {
    let directory = config.tasks_root().join(subpath);
    let mut results = Vec::new();

    for entry in fs::read_dir(&directory)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(HIDDEN_MARKER) {
            continue;
        }

        let is_dir = entry.file_type()?.is_dir();
        let extension = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let Some(kind) = classify(is_dir, extension, config) else {
            continue;
        };

        let relative_path = subpath.join(&name);
        results.push(Item {
            relative_path: relative_path.clone(),
            absolute_path: entry.path(),
            kind,
        });

        if kind == ItemKind::Task {
            results.extend(scan(config, &relative_path)?);
        }
    }

    Ok(results)
}

/// All task items under the tasks root, from one full scan.
pub fn tasks(config: &RunnerConfig) -> SimplyResult<Vec<Item>> {
    let items = scan(config, Path::new(""))?;
    Ok(items
        .into_iter()
        .filter(|item| item.kind == ItemKind::Task)
        .collect())
}

/// All config items under the tasks root, from one full scan.
pub fn config_items(config: &RunnerConfig) -> SimplyResult<Vec<Item>> {
    let items = scan(config, Path::new(""))?;
    Ok(items
        .into_iter()
        .filter(|item| item.kind == ItemKind::Config)
        .collect())
}
