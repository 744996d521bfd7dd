use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

// CommandRunner is the seam between the dump logic and the outside world,
// so the dump path can be tested without a container runtime installed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner {
    async fn run(&self, spec: CommandSpec) -> Result<CommandOutput>;
}

pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: CommandSpec) -> Result<CommandOutput> {
        if which::which(&spec.program).is_err() {
            bail!(
                "{} not found in PATH, install Docker first: https://docs.docker.com/engine/install/",
                spec.program
            );
        }

        let output = Command::new(&spec.program).args(&spec.args).output().await?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
