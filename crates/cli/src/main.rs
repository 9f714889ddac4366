use std::env;

use anyhow::Result;
use clap::Parser;
use simply_core::task_manager::{TaskManager, TaskManagerConfig};

mod commands;

/// Simply - a minimal sequential task runner
#[derive(Parser)]
#[command(name = "simply")]
#[command(about = "Runs the scripts and binaries of a task folder in order")]
#[command(version)]
struct Cli {
    /// Names of the tasks to run, in order
    tasks: Vec<String>,

    /// List all registered tasks
    #[arg(short, long)]
    list: bool,

    /// Install the dependencies declared by task config files
    #[arg(long)]
    install: bool,

    /// Persist installed dependencies to the manifest
    #[arg(long, requires = "install")]
    save: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the task manager with all business logic
    let manager = TaskManager::new(TaskManagerConfig {
        root_dir: env::current_dir()?,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize task runner: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    if cli.list {
        commands::list::execute(&manager)
    } else if cli.install {
        commands::install::execute(&manager, cli.save)
    } else if cli.tasks.is_empty() {
        println!("Use \"simply --list\" to list available tasks.");
        Ok(())
    } else {
        commands::run::execute(&manager, &cli.tasks)
    }
}
