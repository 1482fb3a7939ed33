//! Command execution primitives.
//!
//! Every primitive records the command in the run log and echoes it before
//! anything is spawned:
//!
//! - [`Executor::run`] runs once and keeps going on failure
//! - [`Executor::retry`] reruns until the command exits zero
//! - [`Executor::background`] spawns and returns the child
//! - [`Executor::output`] / [`Executor::json_output`] capture stdout

use std::process::{Child, Stdio};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::run_log::RunLog;
use crate::utils::command::{self, CommandLine};

/// Prefix for everything the runner itself prints.
pub const PREFIX: &str = "testtool:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCommand {
    pub command: String,
    pub exit_code: i32,
}

pub struct Executor<'a> {
    log: &'a mut RunLog,
    failures: Vec<FailedCommand>,
}

impl<'a> Executor<'a> {
    pub fn new(log: &'a mut RunLog) -> Self {
        Self {
            log,
            failures: Vec::new(),
        }
    }

    /// Run once with inherited stdio. A non-zero exit prints a warning and is
    /// remembered, but is not an error.
    pub fn run(&mut self, line: &CommandLine) -> Result<()> {
        let rendered = self.announce(line)?;
        let exit_code = command::run_passthrough(line);
        if exit_code != 0 {
            eprintln!(
                "{} warning: command exited with {}, continuing",
                PREFIX, exit_code
            );
            self.failures.push(FailedCommand {
                command: rendered,
                exit_code,
            });
        }
        Ok(())
    }

    /// Run until the command exits zero. Each attempt is logged. There is no
    /// attempt limit and no delay between attempts. Returns the attempt count.
    pub fn retry(&mut self, line: &CommandLine) -> Result<u32> {
        let mut attempts = 0;
        loop {
            self.announce(line)?;
            attempts += 1;
            if command::run_passthrough(line) == 0 {
                return Ok(attempts);
            }
            println!("*** Retry");
        }
    }

    /// Spawn without waiting. The caller owns the child.
    pub fn background(&mut self, line: &CommandLine) -> Result<Child> {
        let rendered = self.announce(line)?;
        line.to_command()
            .spawn()
            .map_err(|e| Error::internal_io(e.to_string(), Some(format!("spawn {}", rendered))))
    }

    /// Run to completion and return stdout as text. stderr is captured too and
    /// shown in the warning when the command fails.
    pub fn output(&mut self, line: &CommandLine) -> Result<String> {
        let rendered = self.announce(line)?;
        let output = line
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::internal_io(e.to_string(), Some(format!("run {}", rendered))))?;

        if !output.status.success() {
            eprintln!(
                "{} warning: command exited with {}: {}",
                PREFIX,
                output.status.code().unwrap_or(-1),
                command::error_text(&output)
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run to completion and decode stdout as JSON.
    pub fn json_output<T: DeserializeOwned>(&mut self, line: &CommandLine) -> Result<T> {
        let stdout = self.output(line)?;
        serde_json::from_str(&stdout)
            .map_err(|e| Error::command_output_not_json(e, line.to_string(), &stdout))
    }

    pub fn failures(&self) -> &[FailedCommand] {
        &self.failures
    }

    /// Commands issued through this executor's log so far.
    pub fn commands_issued(&self) -> usize {
        self.log.lines()
    }

    pub fn into_failures(self) -> Vec<FailedCommand> {
        self.failures
    }

    fn announce(&mut self, line: &CommandLine) -> Result<String> {
        let rendered = line.to_string();
        self.log.record(&rendered)?;
        println!("{} {}", PREFIX, rendered);
        Ok(rendered)
    }
}
