//! Task execution module
//!
//! This module handles the actual execution of task items: the command
//! runner capability that spawns external processes and the sequential
//! runner that drives it in scan order.

pub mod command;
pub mod runner;

pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use runner::TaskRunner;
