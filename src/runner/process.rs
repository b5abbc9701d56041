//! Shell execution for plan commands, and redaction of logged command text.

use super::RunnerError;
use crate::ir::BuildPlan;
use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};
use tracing::{debug, info};

/// Default shell used to run commands.
pub const SHELL_PROGRAM: &str = "sh";
/// Environment variable override for the shell.
pub const SHELL_ENV: &str = "MAKEP_SHELL";

const SENSITIVE_KEYWORDS: [&str; 3] = ["password", "token", "secret"];
const REDACTED: &str = "***REDACTED***";

fn resolve_shell_with<F>(mut read_env: F) -> PathBuf
where
    F: FnMut(&str) -> Option<OsString>,
{
    read_env(SHELL_ENV)
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(SHELL_PROGRAM), PathBuf::from)
}

/// Determine which shell runs commands: `$MAKEP_SHELL`, or `sh`.
#[must_use]
pub fn resolve_shell() -> PathBuf {
    resolve_shell_with(|key| env::var_os(key))
}

fn is_sensitive(word: &str) -> bool {
    let lower = word.to_lowercase();
    SENSITIVE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn redact_word(word: &str) -> String {
    if is_sensitive(word) {
        word.split_once('=').map_or_else(
            || REDACTED.to_owned(),
            |(key, _)| format!("{key}={REDACTED}"),
        )
    } else {
        word.to_owned()
    }
}

/// Redact sensitive words in `command` for logging.
///
/// Words mentioning a password, token or secret are masked, keeping the key
/// of `key=value` words. Whitespace is normalised to single spaces.
///
/// # Examples
/// ```
/// use makep::runner::redact_command;
/// assert_eq!(
///     redact_command("curl -H token=abc https://example.com"),
///     "curl -H token=***REDACTED*** https://example.com"
/// );
/// assert_eq!(redact_command("cc -c main.c"), "cc -c main.c");
/// ```
#[must_use]
pub fn redact_command(command: &str) -> String {
    command
        .split_whitespace()
        .map(redact_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run every command of `plan` in order, stopping at the first failure.
///
/// Each command is echoed to `out` before it runs; its standard output is
/// forwarded to `out` and its standard error to this process's stderr.
pub(super) fn execute_plan(
    plan: &BuildPlan,
    shell: &Path,
    directory: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), RunnerError> {
    for step in &plan.steps {
        for command in &step.commands {
            run_command(shell, directory, &step.target, command, out)?;
        }
    }
    Ok(())
}

fn run_command(
    shell: &Path,
    directory: Option<&Path>,
    target: &str,
    command: &str,
    out: &mut dyn Write,
) -> Result<(), RunnerError> {
    let mut cmd = Command::new(shell);
    cmd.arg("-c").arg(command).stdin(Stdio::null());
    if let Some(dir) = directory {
        cmd.current_dir(dir);
    }
    info!(
        target_name = target,
        "Running command: {} -c {}",
        shell.display(),
        redact_command(command)
    );

    let forward_err = |source: io::Error| RunnerError::Output {
        target: target.to_owned(),
        source,
    };
    writeln!(out, "{command}").map_err(forward_err)?;
    let output = cmd.output().map_err(|source| RunnerError::Spawn {
        target: target.to_owned(),
        command: command.to_owned(),
        source,
    })?;
    out.write_all(&output.stdout).map_err(forward_err)?;
    out.flush().map_err(forward_err)?;
    if let Err(err) = io::stderr().write_all(&output.stderr) {
        debug!("stderr forwarding failed; output truncated: {err}");
    }

    if output.status.success() {
        Ok(())
    } else {
        Err(RunnerError::CommandFailed {
            target: target.to_owned(),
            command: command.to_owned(),
            status: output.status,
        })
    }
}
