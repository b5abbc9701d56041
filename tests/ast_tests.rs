//! Tests for the makefile model produced by the manifest parser.

use anyhow::{Context, Result, ensure};
use makep::ast::Makefile;
use makep::manifest;
use rstest::rstest;

/// Convenience wrapper around the library parser for tests.
fn parse_makefile(text: &str) -> Result<Makefile> {
    Ok(manifest::from_str(text)?)
}

#[rstest]
fn parse_compile_makefile() -> Result<()> {
    let makefile = parse_makefile(include_str!("data/compile.mk"))?;
    ensure!(
        makefile.start_target.as_deref() == Some("app"),
        "unexpected start target: {:?}",
        makefile.start_target
    );
    let cflags = makefile.vars.get("CFLAGS").context("CFLAGS should be defined")?;
    ensure!(cflags == "-O2 -Wall", "unexpected CFLAGS: {cflags}");
    ensure!(
        makefile.dependencies("main.o") == ["main.c", "util.h"],
        "unexpected main.o dependencies: {:?}",
        makefile.dependencies("main.o")
    );
    ensure!(
        makefile.graph.get("clean").is_none(),
        "targets without dependencies have no graph entry"
    );
    let clean = makefile.commands("clean").context("clean should be declared")?;
    ensure!(clean == ["rm -f app main.o util.o"], "unexpected clean: {clean:?}");
    Ok(())
}

#[rstest]
fn declared_and_mentioned_targets() -> Result<()> {
    let makefile = parse_makefile(include_str!("data/compile.mk"))?;
    ensure!(makefile.declares("util.o"), "util.o is declared");
    ensure!(!makefile.declares("util.c"), "util.c only appears as a dependency");
    ensure!(makefile.mentions("util.c"), "util.c is mentioned");
    ensure!(!makefile.mentions("ghost"), "ghost is never mentioned");
    Ok(())
}

#[rstest]
fn model_preserves_declaration_order() -> Result<()> {
    let makefile = parse_makefile(include_str!("data/compile.mk"))?;
    let declared: Vec<&str> = makefile.actions.keys().map(String::as_str).collect();
    ensure!(
        declared == ["app", "main.o", "util.o", "clean"],
        "unexpected declaration order: {declared:?}"
    );
    Ok(())
}

#[rstest]
fn model_serialises_to_json() -> Result<()> {
    let makefile = parse_makefile("X = 1\nall: dep\n\techo $(X)\n")?;
    let json = serde_json::to_value(&makefile).context("serialise model")?;
    ensure!(json["vars"]["X"] == "1", "unexpected vars: {}", json["vars"]);
    ensure!(json["start_target"] == "all", "unexpected start: {}", json["start_target"]);
    ensure!(json["graph"]["all"][0] == "dep", "unexpected graph: {}", json["graph"]);
    ensure!(
        json["actions"]["all"][0] == "echo $(X)",
        "unexpected actions: {}",
        json["actions"]
    );
    Ok(())
}
