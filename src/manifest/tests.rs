//! Tests for the makefile model builder.

use super::*;
use rstest::{fixture, rstest};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[fixture]
fn compile_makefile() -> &'static str {
    concat!(
        "CC = gcc\n",
        "CFLAGS = -O2 -Wall\n",
        "\n",
        "app: main.o util.o\n",
        "\t$(CC) -o app main.o util.o\n",
        "\n",
        "main.o: main.c\n",
        "\t$(CC) $(CFLAGS) -c main.c\n",
        "\n",
        "util.o: util.c\n",
        "\t$(CC) $(CFLAGS) -c util.c\n",
    )
}

#[rstest]
fn parses_variables_graph_and_actions() {
    let makefile = from_str("CC = gcc\nall: main.o\n\tcc main.o\n").expect("parse");

    assert_eq!(makefile.vars.get("CC").map(String::as_str), Some("gcc"));
    assert_eq!(makefile.vars.len(), 1);
    assert_eq!(makefile.start_target.as_deref(), Some("all"));
    assert_eq!(makefile.dependencies("all"), strings(&["main.o"]).as_slice());
    assert_eq!(makefile.graph.len(), 1);
    assert_eq!(makefile.commands("all"), Some(strings(&["cc main.o"]).as_slice()));
    assert_eq!(makefile.actions.len(), 1);
}

#[rstest]
fn keeps_command_text_unsubstituted() {
    let makefile = from_str("FLAGS = -O2\nbuild: \n\tgcc $(FLAGS) -c\n").expect("parse");
    assert_eq!(
        makefile.commands("build"),
        Some(strings(&["gcc $(FLAGS) -c"]).as_slice())
    );
    assert!(
        !makefile.graph.contains_key("build"),
        "targets without dependencies have no graph entry"
    );
}

#[rstest]
fn parses_multi_target_file(compile_makefile: &str) {
    let makefile = from_str(compile_makefile).expect("parse");
    assert_eq!(makefile.start_target.as_deref(), Some("app"));
    assert_eq!(
        makefile.graph.keys().map(String::as_str).collect::<Vec<_>>(),
        ["app", "main.o", "util.o"]
    );
    assert_eq!(makefile.dependencies("util.o"), strings(&["util.c"]).as_slice());
    assert_eq!(
        makefile.commands("main.o"),
        Some(strings(&["$(CC) $(CFLAGS) -c main.c"]).as_slice())
    );
    assert!(!makefile.declares("main.c"));
}

#[rstest]
fn parsing_is_deterministic(compile_makefile: &str) {
    let first = from_str(compile_makefile).expect("first parse");
    let second = from_str(compile_makefile).expect("second parse");
    assert_eq!(first, second);
}

#[rstest]
fn command_on_first_line_is_a_parse_error() {
    let err = from_str("\techo hi\nall:\n").expect_err("command without target");
    assert_eq!(err.line(), 1);
    assert_eq!(err.failure(), ParseFailure::CommandOutsideTarget);
}

#[rstest]
#[case("all: a\n\techo a\n\nstray text\n", 4)]
#[case("X = 1\n   \n  indented with spaces\n", 3)]
#[case("all:\n\techo\nX = 1\n\techo again\n", 4)]
#[case("all:\n\techo\n\n\techo again\n", 4)]
fn reports_one_indexed_line_numbers(#[case] text: &str, #[case] line: usize) {
    let err = from_str(text).expect_err("parse should fail");
    assert_eq!(err.line(), line);
}

#[rstest]
fn spaces_instead_of_tab_carry_a_hint() {
    let err = from_str("all:\n    echo hi\n").expect_err("spaces are not a tab");
    let ManifestError::Parse { failure, help, .. } = err;
    assert_eq!(failure, ParseFailure::UnrecognizedLine);
    assert!(
        help.is_some_and(|h| h.contains("tab")),
        "expected a tab hint"
    );
}

#[rstest]
fn graph_edges_accumulate_while_commands_reset() {
    let text = concat!(
        "t: a\n",
        "\techo first\n",
        "\n",
        "t: b\n",
        "\techo second\n",
    );
    let makefile = from_str(text).expect("parse");
    assert_eq!(makefile.dependencies("t"), strings(&["a", "b"]).as_slice());
    assert_eq!(
        makefile.commands("t"),
        Some(strings(&["echo second"]).as_slice())
    );
}

#[rstest]
fn redeclaring_without_commands_clears_actions() {
    let makefile = from_str("t:\n\techo once\nt:\n").expect("parse");
    assert_eq!(makefile.commands("t"), Some(&[][..]));
}

#[rstest]
fn start_target_is_first_declared() {
    let makefile = from_str("V = 1\nfirst:\nsecond: first\nfirst: x\n").expect("parse");
    assert_eq!(makefile.start_target.as_deref(), Some("first"));
}

#[rstest]
fn empty_text_yields_empty_model() {
    let makefile = from_str("").expect("parse");
    assert_eq!(makefile, crate::ast::Makefile::default());
}

#[rstest]
fn block_without_trailing_newline_is_flushed() {
    let makefile = from_str("all:\n\techo a\n\techo b").expect("parse");
    assert_eq!(
        makefile.commands("all"),
        Some(strings(&["echo a", "echo b"]).as_slice())
    );
}

#[rstest]
fn variable_line_closes_block_and_later_definition_wins() {
    let makefile = from_str("all:\n\techo a\nCC = cc\nCC = clang\n").expect("parse");
    assert_eq!(makefile.commands("all"), Some(strings(&["echo a"]).as_slice()));
    assert_eq!(makefile.vars.get("CC").map(String::as_str), Some("clang"));
}

#[rstest]
fn blank_tab_line_outside_block_is_blank() {
    let makefile = from_str("X = 1\n\t\nall:\n").expect("parse");
    assert_eq!(makefile.start_target.as_deref(), Some("all"));
}

#[rstest]
fn tab_line_inside_block_is_an_empty_command() {
    let makefile = from_str("all:\n\t\n").expect("parse");
    assert_eq!(makefile.commands("all"), Some(strings(&[""]).as_slice()));
}

#[rstest]
fn duplicate_and_self_dependencies_are_kept() {
    let makefile = from_str("t: t a a\n").expect("parse");
    assert_eq!(makefile.dependencies("t"), strings(&["t", "a", "a"]).as_slice());
}

#[rstest]
fn from_path_reads_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("makefile");
    std::fs::write(&path, "all: dep\n\techo all\n").expect("write makefile");
    let makefile = from_path(&path).expect("load");
    assert_eq!(makefile.start_target.as_deref(), Some("all"));
}

#[rstest]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = from_path(dir.path().join("absent")).expect_err("missing file");
    assert!(err.to_string().contains("failed to read"), "{err}");
}
