//! Command execution capability
//!
//! Process spawning is isolated behind a small trait so the runner and the
//! install operation can be exercised in tests without launching real
//! processes.

use std::io;
use std::process::Command;

/// Captured result of one completed command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code, when the process exited normally.
    pub code: Option<i32>,
    pub success: bool,
}

impl CommandOutput {
    /// Standard output and standard error concatenated, in that order.
    pub fn combined(&self) -> Vec<u8> {
        let mut combined = self.stdout.clone();
        combined.extend_from_slice(&self.stderr);
        combined
    }
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Capability for spawning an external command and waiting for it to exit.
///
/// Implementations block until the spawned process exits and return its
/// captured output; exactly one command runs at a time.
pub trait CommandRunner {
    fn run(&self, command: &mut Command) -> io::Result<CommandOutput>;
}

/// Production runner backed by [`std::process::Command::output`].
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &mut Command) -> io::Result<CommandOutput> {
        let output = command.output()?;
        Ok(output.into())
    }
}
