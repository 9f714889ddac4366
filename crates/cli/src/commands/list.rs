use anyhow::Result;
use colored::*;
use simply_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager) -> Result<()> {
    let result = manager
        .list_tasks()
        .map_err(|e| anyhow::anyhow!("Failed to list tasks: {}", e))?;

    println!("{}", "The following tasks are available:".bold());

    if result.tasks.is_empty() {
        println!("  {}", "No tasks found".dimmed());
        return Ok(());
    }

    // Scan order, deliberately unsorted.
    for task in &result.tasks {
        println!("-- {}", task.relative_path.display());
    }

    Ok(())
}
