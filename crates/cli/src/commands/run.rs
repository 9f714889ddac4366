use anyhow::Result;
use colored::*;
use simply_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, names: &[String]) -> Result<()> {
    manager
        .run_tasks(names)
        .map_err(|e| anyhow::anyhow!("Failed to run tasks: {}", e))?;

    println!();
    println!("{} {}", "✓".green().bold(), "Finished.".green().bold());

    Ok(())
}
