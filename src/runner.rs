//! External command execution
//!
//! Every external tool invocation goes through the `CommandRunner` trait
//! so the pipeline can be tested without a Cordova or Angular toolchain
//! installed. The real implementation blocks until the child exits and
//! treats any non-zero status as fatal for the run. No retries, no
//! timeouts, no output capture.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{WrapError, WrapResult};

/// Abstract runner for external commands.
///
/// `cwd` is passed explicitly per invocation; implementations must not
/// change the process-wide working directory.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, wait for completion.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> WrapResult<()>;
}

/// Runner backed by `std::process::Command`.
///
/// Child stdio is inherited so tool output (and any password prompts)
/// reach the terminal, except in `--json` mode where stdout must stay a
/// clean event stream.
pub struct ProcessRunner {
    json: bool,
    verbose: bool,
}

impl ProcessRunner {
    pub fn new(json: bool, verbose: bool) -> Self {
        Self { json, verbose }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> WrapResult<()> {
        let display = display_command(program, args);

        if self.verbose && !self.json {
            eprintln!("→ {} (in {})", display, cwd.display());
        }

        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(cwd).stdin(Stdio::inherit());

        if self.json {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| WrapError::Spawn {
            command: display.clone(),
            source: e,
        })?;

        if !status.success() {
            return Err(WrapError::CommandFailed {
                command: display,
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Human-readable form of an invocation, used in error messages and events.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Recording runner for tests.
///
/// Collects every invocation and optionally fails at a chosen index so
/// tests can assert which steps never ran.
#[cfg(test)]
#[derive(Default)]
pub struct MockRunner {
    pub calls: std::sync::Mutex<Vec<(String, std::path::PathBuf)>>,
    pub fail_on: Option<usize>,
}

#[cfg(test)]
impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
            fail_on: Some(index),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(c, _)| c.clone())
            .collect()
    }

    pub fn cwds(&self) -> Vec<std::path::PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, d)| d.clone())
            .collect()
    }
}

#[cfg(test)]
impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> WrapResult<()> {
        let display = display_command(program, args);
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push((display.clone(), cwd.to_path_buf()));

        if self.fail_on == Some(index) {
            return Err(WrapError::CommandFailed {
                command: display,
                code: Some(1),
            });
        }
        Ok(())
    }
}
