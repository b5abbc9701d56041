//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! loads the makefile, resolves the build plan and then either prints each
//! command block or runs the commands through the shell.

mod error;
mod path_helpers;
mod process;

pub use error::RunnerError;
pub use process::{SHELL_ENV, SHELL_PROGRAM, redact_command, resolve_shell};

use crate::cli::Cli;
use crate::diagnostics::ResultExt;
use crate::ir::{BuildPlan, PlanOptions};
use crate::manifest;
use miette::Result;
use std::io::{self, Write};
use tracing::{debug, info};

use path_helpers::{ensure_makefile_exists, resolve_makefile_path};

/// Execute the parsed [`Cli`], writing to standard output.
///
/// # Errors
///
/// Returns an error if the makefile cannot be loaded or parsed, the plan
/// cannot be resolved, or a command fails.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_output(cli, &mut handle)
}

/// Execute the parsed [`Cli`], writing command blocks or command output to
/// `out`.
///
/// The plan is resolved completely before anything is written, so a parse
/// error or an undefined variable produces no output at all.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let plan = plan(cli)?;
    if cli.exec {
        let shell = resolve_shell();
        process::execute_plan(&plan, &shell, cli.directory.as_deref(), out)?;
    } else {
        print_plan(&plan, out)?;
    }
    Ok(())
}

/// Load the makefile referenced by `cli` and resolve its [`BuildPlan`].
///
/// # Errors
///
/// Returns an error if the makefile is missing or invalid, or if plan
/// resolution fails.
pub fn plan(cli: &Cli) -> Result<BuildPlan> {
    let path = resolve_makefile_path(cli)?;
    ensure_makefile_exists(&path)?;
    info!(path = %path, "loading makefile");
    let makefile = manifest::from_path(&path)?;
    let model_json = serde_json::to_string_pretty(&makefile).diag("serialising makefile model")?;
    debug!("Model:\n{model_json}");

    let start = cli
        .target
        .as_deref()
        .or(makefile.start_target.as_deref());
    info!(start = ?start, "resolving build plan");
    let options = if cli.strict {
        PlanOptions::strict()
    } else {
        PlanOptions::default()
    };
    Ok(BuildPlan::from_makefile(&makefile, start, options)?)
}

/// Write one newline-joined block per plan step.
fn print_plan(plan: &BuildPlan, out: &mut dyn Write) -> Result<()> {
    for step in &plan.steps {
        writeln!(out, "{}", step.block()).diag("write command block")?;
    }
    out.flush().diag("flush output")
}
