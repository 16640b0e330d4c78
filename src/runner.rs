//! External command execution.

use std::fmt;
use std::process::Command;
use tracing::debug;

use crate::error::{CloudError, Result};

/// A program plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// stdout followed by stderr.
    pub output: String,
}

/// Runs external commands to completion.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;

    /// Runs `invocation` and turns a non-zero exit into an error carrying the
    /// combined output.
    fn run_checked(&self, invocation: &Invocation) -> Result<String> {
        let out = self.run(invocation)?;
        if out.success {
            Ok(out.output)
        } else {
            Err(CloudError::ExternalCommandFailed {
                command: invocation.to_string(),
                output: out.output,
            })
        }
    }
}

/// Spawns real processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        debug!("Running: {}", invocation);
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| CloudError::ExternalCommandFailed {
                command: invocation.to_string(),
                output: format!("failed to execute {}: {}", invocation.program, e),
            })?;

        debug!("{} exited with {}", invocation.program, output.status);

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(CommandOutput {
            success: output.status.success(),
            output: combined,
        })
    }
}
