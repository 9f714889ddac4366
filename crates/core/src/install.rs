//! Dependency installation across task config items
//!
//! Every config item discovered under the tasks root is parsed as a
//! manifest fragment; their dependency tables are merged into one mapping
//! keyed by dependency name and the package manager is invoked once per
//! entry, sequentially.

use std::collections::BTreeMap;
use std::fs;
use std::process::Command;

use colored::*;

use crate::configs::manifest::{parse_manifest, Manifest};
use crate::configs::runner::RunnerConfig;
use crate::execution::command::CommandRunner;
use crate::scanner;
use crate::types::SimplyResult;

const PACKAGE_MANAGER: &str = "npm";

/// Merge the dependency tables of the given manifests into one mapping.
///
/// Regular dependencies are folded in before dev dependencies; on duplicate
/// names, later manifests win.
pub fn merge_dependencies(manifests: &[Manifest]) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    for manifest in manifests {
        for table in [&manifest.dependencies, &manifest.dev_dependencies]
            .into_iter()
            .flatten()
        {
            for (name, version) in table {
                merged.insert(name.clone(), version.clone());
            }
        }
    }

    merged
}

/// Install the merged dependencies declared by every config item under the
/// tasks root.
///
/// Config items that cannot be read or parsed are reported and skipped; a
/// failing install command is reported and does not abort the remaining
/// entries.
pub fn install_dependencies(
    config: &RunnerConfig,
    command_runner: &dyn CommandRunner,
    save: bool,
) -> SimplyResult<()> {
    let mut manifests = Vec::new();
    for item in scanner::config_items(config)? {
        match fs::read_to_string(&item.absolute_path)
            .map_err(crate::types::SimplyError::from)
            .and_then(|content| parse_manifest(&content))
        {
            Ok(manifest) => manifests.push(manifest),
            Err(error) => {
                eprintln!(
                    "{} skipping {}: {}",
                    "✗".red().bold(),
                    item.absolute_path.display(),
                    error
                );
            }
        }
    }

    let merged = merge_dependencies(&manifests);
    if merged.is_empty() {
        println!("No dependencies found.");
        return Ok(());
    }

    for (name, version) in &merged {
        let package = format!("{}@{}", name, version);
        println!("{} {}", "Installing".bold(), package.cyan());

        let mut command = Command::new(PACKAGE_MANAGER);
        command.arg("install").arg(&package);
        if save {
            command.arg("--save");
        }

        match command_runner.run(&mut command) {
            Ok(output) if output.success => {}
            Ok(output) => {
                eprintln!(
                    "{} install {} exited with code {}",
                    "✗".red().bold(),
                    package,
                    output.code.unwrap_or(-1)
                );
            }
            Err(error) => {
                eprintln!(
                    "{} failed to run {} install: {}",
                    "✗".red().bold(),
                    PACKAGE_MANAGER,
                    error
                );
            }
        }
    }

    Ok(())
}
