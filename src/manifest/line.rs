//! Line classification for makefile text.
//!
//! Each raw line maps to exactly one [`Line`] variant. Matchers are tried in
//! a fixed order: variable definition, dependency declaration, command line,
//! blank line. The first match wins, so a tab-indented line is only ever a
//! command when it cannot be read as something else.

/// Classification of a single makefile line together with its captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `NAME = definition`
    Variable {
        /// Variable name, ASCII letters and underscores only.
        name: &'a str,
        /// Everything after `=` and any whitespace following it.
        definition: &'a str,
    },
    /// `target: dep1 dep2 ...`
    Dependency {
        /// Declared target name.
        target: &'a str,
        /// Whitespace separated dependency names; empty when none are listed.
        dependencies: Vec<&'a str>,
    },
    /// A line starting with a tab; holds the text after that first tab.
    Command(&'a str),
    /// A line containing only whitespace.
    Blank,
    /// Anything else.
    Unrecognized,
}

/// Classify `line`, which must not contain the trailing newline.
///
/// # Examples
/// ```rust
/// use makep::manifest::{Line, classify};
///
/// assert_eq!(
///     classify("CC = gcc"),
///     Line::Variable { name: "CC", definition: "gcc" }
/// );
/// assert_eq!(
///     classify("app: main.o util.o"),
///     Line::Dependency { target: "app", dependencies: vec!["main.o", "util.o"] }
/// );
/// assert_eq!(classify("\tcc -c main.c"), Line::Command("cc -c main.c"));
/// assert_eq!(classify("   "), Line::Blank);
/// assert_eq!(classify("oops"), Line::Unrecognized);
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    if let Some((name, definition)) = match_variable(line) {
        return Line::Variable { name, definition };
    }
    if let Some((target, rest)) = match_dependency(line) {
        return Line::Dependency {
            target,
            dependencies: rest.split_whitespace().collect(),
        };
    }
    if let Some(command) = line.strip_prefix('\t') {
        return Line::Command(command);
    }
    if is_blank(line) {
        return Line::Blank;
    }
    Line::Unrecognized
}

/// Returns whether `line` consists solely of whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn is_variable_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_target_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'
}

/// Splits a leading run of `accept` characters from `line`, followed by
/// optional whitespace, `sep`, and optional whitespace.
///
/// Returns the run and the remainder of the line.
///
/// # Examples
/// ```rust,ignore
/// assert_eq!(split_assignment("A = b", is_variable_char, '='), Some(("A", "b")));
/// assert_eq!(split_assignment(" A = b", is_variable_char, '='), None);
/// ```
fn split_assignment(line: &str, accept: fn(char) -> bool, sep: char) -> Option<(&str, &str)> {
    let end = line
        .char_indices()
        .find(|(_, ch)| !accept(*ch))
        .map_or(line.len(), |(idx, _)| idx);
    if end == 0 {
        return None;
    }
    let (head, tail) = line.split_at(end);
    let rest = tail.trim_start().strip_prefix(sep)?;
    Some((head, rest.trim_start()))
}

fn match_variable(line: &str) -> Option<(&str, &str)> {
    split_assignment(line, is_variable_char, '=')
}

fn match_dependency(line: &str) -> Option<(&str, &str)> {
    split_assignment(line, is_target_char, ':')
}
