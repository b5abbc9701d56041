//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure. The only positional argument is
//! the target to build; extra positionals are rejected by clap as a usage
//! error before any makefile is read.

use clap::Parser;
use std::path::PathBuf;

use crate::manifest::DEFAULT_MAKEFILE;

/// Print, or run, the commands needed to build a makefile target.
#[derive(Debug, Clone, Parser, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the makefile to use.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_MAKEFILE)]
    pub file: PathBuf,

    /// Run as if started in this directory.
    ///
    /// This affects makefile lookup and the working directory of executed
    /// commands.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Execute the commands through the shell instead of printing them.
    #[arg(short = 'x', long)]
    pub exec: bool,

    /// Treat dependency cycles and unknown targets as errors.
    #[arg(long)]
    pub strict: bool,

    /// Target to build; defaults to the first target in the makefile.
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_MAKEFILE),
            directory: None,
            verbose: false,
            exec: false,
            strict: false,
            target: None,
        }
    }
}
