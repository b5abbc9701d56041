//! Single-pass model builder driven by [`classify`].
//!
//! The builder is either idle or has one target block open. Variable lines,
//! dependency lines and blank lines close the open block, storing its
//! commands under the target name. Command lines extend the open block and
//! are rejected when no block is open.

use tracing::debug;

use crate::ast::Makefile;

use super::diagnostics::{MakefileName, ManifestError, ParseFailure, parse_error};
use super::line::{Line, classify, is_blank};

/// Target block currently accepting command lines.
#[derive(Debug)]
struct OpenTarget {
    name: String,
    commands: Vec<String>,
}

#[derive(Debug, Default)]
struct ModelBuilder {
    makefile: Makefile,
    open: Option<OpenTarget>,
}

impl ModelBuilder {
    /// Store the open block's commands, replacing any earlier list.
    fn close(&mut self) {
        if let Some(OpenTarget { name, commands }) = self.open.take() {
            debug!(%name, commands = commands.len(), "closing target block");
            self.makefile.actions.insert(name, commands);
        }
    }

    fn define(&mut self, name: &str, definition: &str) {
        self.close();
        self.makefile
            .vars
            .insert(name.to_owned(), definition.to_owned());
    }

    fn declare(&mut self, target: &str, dependencies: &[&str]) {
        self.close();
        if self.makefile.start_target.is_none() {
            self.makefile.start_target = Some(target.to_owned());
        }
        if !dependencies.is_empty() {
            self.makefile
                .graph
                .entry(target.to_owned())
                .or_default()
                .extend(dependencies.iter().map(|dep| (*dep).to_owned()));
        }
        self.open = Some(OpenTarget {
            name: target.to_owned(),
            commands: Vec::new(),
        });
    }

    /// Append a command to the open block; returns `false` when none is open.
    fn push_command(&mut self, command: &str) -> bool {
        self.open.as_mut().is_some_and(|open| {
            open.commands.push(command.to_owned());
            true
        })
    }

    fn finish(mut self) -> Makefile {
        self.close();
        self.makefile
    }
}

/// Parse `text` into a [`Makefile`].
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// line which closes any open block.
pub(crate) fn parse(text: &str, name: &MakefileName) -> Result<Makefile, ManifestError> {
    let mut builder = ModelBuilder::default();
    for (idx, raw) in text.split('\n').enumerate() {
        let line_no = idx + 1;
        match classify(raw) {
            Line::Variable { name: var, definition } => builder.define(var, definition),
            Line::Dependency {
                target,
                dependencies,
            } => builder.declare(target, &dependencies),
            Line::Command(command) => {
                if builder.push_command(command) {
                    continue;
                }
                // Whitespace-only lines starting with a tab are blank outside a block.
                if is_blank(raw) {
                    builder.close();
                } else {
                    return Err(parse_error(
                        text,
                        name,
                        line_no,
                        raw,
                        ParseFailure::CommandOutsideTarget,
                    ));
                }
            }
            Line::Blank => builder.close(),
            Line::Unrecognized => {
                return Err(parse_error(
                    text,
                    name,
                    line_no,
                    raw,
                    ParseFailure::UnrecognizedLine,
                ));
            }
        }
    }
    Ok(builder.finish())
}
