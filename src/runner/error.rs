//! Error types for the runner module.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the makefile or executing commands.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// The makefile does not exist at the expected path.
    #[error("makefile `{}` not found", .path.display())]
    #[diagnostic(
        code(makep::runner::makefile_not_found),
        help("Create a `makefile` here, pass `--file`, or change directory with `-C`.")
    )]
    MakefileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The shell could not be started for a command.
    #[error("failed to start `{command}` for target `{target}`")]
    #[diagnostic(code(makep::runner::spawn))]
    Spawn {
        /// Target owning the command.
        target: String,
        /// Substituted command text.
        command: String,
        /// Underlying process error.
        #[source]
        source: std::io::Error,
    },

    /// Command output could not be written.
    #[error("failed to forward output of target `{target}`")]
    #[diagnostic(code(makep::runner::output))]
    Output {
        /// Target whose commands were running.
        target: String,
        /// Underlying write error.
        #[source]
        source: std::io::Error,
    },

    /// A command exited unsuccessfully; later commands are not run.
    #[error("command `{command}` for target `{target}` failed with {status}")]
    #[diagnostic(code(makep::runner::command_failed))]
    CommandFailed {
        /// Target owning the command.
        target: String,
        /// Substituted command text.
        command: String,
        /// Exit status reported by the shell.
        status: std::process::ExitStatus,
    },
}
