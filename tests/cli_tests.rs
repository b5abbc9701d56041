//! Unit tests for CLI argument parsing and validation.
//!
//! This module exercises the command-line interface defined in [`makep::cli`]
//! using `rstest` for parameterised coverage of success and error scenarios.
use clap::Parser;
use clap::error::ErrorKind;
use makep::cli::Cli;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
#[case(vec!["makep"], PathBuf::from("makefile"), None, None)]
#[case(vec!["makep", "all"], PathBuf::from("makefile"), None, Some("all"))]
#[case(
    vec!["makep", "--file", "build.mk", "-C", "work", "main.o"],
    PathBuf::from("build.mk"),
    Some(PathBuf::from("work")),
    Some("main.o"),
)]
#[case(vec!["makep", "-f", "alt", "ghost"], PathBuf::from("alt"), None, Some("ghost"))]
fn parse_cli(
    #[case] argv: Vec<&str>,
    #[case] file: PathBuf,
    #[case] directory: Option<PathBuf>,
    #[case] target: Option<&str>,
) {
    let cli = Cli::try_parse_from(argv).expect("parse");
    assert_eq!(cli.file, file);
    assert_eq!(cli.directory, directory);
    assert_eq!(cli.target.as_deref(), target);
    assert!(!cli.verbose);
    assert!(!cli.exec);
    assert!(!cli.strict);
}

#[rstest]
fn parse_cli_flags() {
    let cli = Cli::try_parse_from(["makep", "-v", "-x", "--strict", "app"]).expect("parse");
    assert!(cli.verbose);
    assert!(cli.exec);
    assert!(cli.strict);
    assert_eq!(cli.target.as_deref(), Some("app"));
}

#[rstest]
fn default_matches_bare_invocation() {
    let parsed = Cli::try_parse_from(["makep"]).expect("parse");
    assert_eq!(parsed, Cli::default());
}

#[rstest]
#[case(vec!["makep", "a", "b"], ErrorKind::UnknownArgument)]
#[case(vec!["makep", "--file"], ErrorKind::InvalidValue)]
#[case(vec!["makep", "-C"], ErrorKind::InvalidValue)]
#[case(vec!["makep", "--jobs", "4"], ErrorKind::UnknownArgument)]
fn parse_cli_errors(#[case] argv: Vec<&str>, #[case] expected_error: ErrorKind) {
    let err = Cli::try_parse_from(argv).expect_err("unexpected success");
    assert_eq!(err.kind(), expected_error);
}
