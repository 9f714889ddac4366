use anyhow::Result;
use colored::*;
use simply_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, save: bool) -> Result<()> {
    println!("{}", "Installing task dependencies".bold());
    println!();

    manager
        .install_dependencies(save)
        .map_err(|e| anyhow::anyhow!("Failed to install dependencies: {}", e))?;

    Ok(())
}
