//! Sequential task runner
//!
//! Resolves task names against the scanned task list and executes each
//! item of a matched task in scan order, one process at a time. A failing
//! item is reported and never aborts the remaining items or the remaining
//! requested tasks.

use std::path::Path;
use std::process::Command;

use colored::*;

use crate::configs::runner::RunnerConfig;
use crate::execution::command::CommandRunner;
use crate::scanner::{self, Item, ItemKind};
use crate::types::{SimplyError, SimplyResult};

pub struct TaskRunner<'a> {
    config: &'a RunnerConfig,
    command_runner: &'a dyn CommandRunner,
}

impl<'a> TaskRunner<'a> {
    pub fn new(config: &'a RunnerConfig, command_runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            command_runner,
        }
    }

    /// Run every requested task in the order given, with no concurrency
    /// between them.
    ///
    /// A task whose scan fails is reported and does not prevent the
    /// remaining names from running; the failure is surfaced as an error
    /// once all names have been attempted so the caller can map it to a
    /// non-zero exit.
    pub fn run(&self, names: &[String]) -> SimplyResult<()> {
        if names.is_empty() {
            println!("No tasks specified.");
            return Ok(());
        }

        let mut failed = 0usize;
        for name in names {
            if let Err(error) = self.run_task(name) {
                eprintln!("{} task '{}': {}", "✗".red().bold(), name.cyan(), error);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(SimplyError::Task(format!(
                "{} of {} requested tasks failed to scan",
                failed,
                names.len()
            )));
        }

        Ok(())
    }

    /// Run a single named task.
    ///
    /// An unknown name prints a notice and is not an error; IO failures
    /// from the underlying scans propagate to the caller.
    pub fn run_task(&self, name: &str) -> SimplyResult<()> {
        let Some(task) = self.find_task(name)? else {
            println!("Task {} not found.", name.cyan());
            return Ok(());
        };

        println!("{} {}", "Running task".bold(), name.cyan());

        let items = scanner::scan(self.config, &task.relative_path)?;
        for item in &items {
            self.execute_item(item);
        }

        Ok(())
    }

    /// Resolve a task name by exact match on its relative path.
    fn find_task(&self, name: &str) -> SimplyResult<Option<Item>> {
        let tasks = scanner::tasks(self.config)?;
        Ok(tasks
            .into_iter()
            .find(|task| task.relative_path == Path::new(name)))
    }

    /// Spawn one executable item, blocking until it exits, and report its
    /// combined output.
    ///
    /// Task and config items are skipped without spawning anything. A spawn
    /// failure or non-zero exit is logged and the run continues.
    fn execute_item(&self, item: &Item) {
        let mut command = match item.kind {
            ItemKind::Binary => Command::new(&item.absolute_path),
            ItemKind::Script => {
                let extension = item
                    .absolute_path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("");
                let Some(interpreter) = self.config.interpreter_for(extension) else {
                    eprintln!(
                        "{} no interpreter configured for {}",
                        "✗".red().bold(),
                        item.absolute_path.display()
                    );
                    return;
                };
                let mut command = Command::new(interpreter);
                command.arg(&item.absolute_path);
                command
            }
            ItemKind::Task | ItemKind::Config => return,
        };

        println!("- {}", item.absolute_path.display());

        match self.command_runner.run(&mut command) {
            Ok(output) => {
                let combined = output.combined();
                let text = String::from_utf8_lossy(&combined);
                let text = text.trim();
                if !text.is_empty() {
                    println!("{}", text);
                }
                if !output.success {
                    eprintln!(
                        "{} {} exited with code {}",
                        "✗".red().bold(),
                        item.absolute_path.display(),
                        output.code.unwrap_or(-1)
                    );
                }
            }
            Err(error) => {
                eprintln!(
                    "{} failed to execute {}: {}",
                    "✗".red().bold(),
                    item.absolute_path.display(),
                    error
                );
            }
        }
    }
}
