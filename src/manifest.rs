//! Makefile loading helpers.
//!
//! This module turns makefile text into a [`Makefile`] model in one linear
//! pass. Recognised lines are variable definitions (`NAME = value`),
//! dependency declarations (`target: deps`), tab-indented command lines and
//! blank lines; anything else aborts the parse with a
//! [`ManifestError::Parse`] naming the offending line.

use crate::ast::Makefile;
use crate::diagnostics::ResultExt;
use miette::Result;
use std::{fs, path::Path};

mod diagnostics;
mod hints;
mod line;
mod parser;

pub use diagnostics::{MakefileName, ManifestError, ParseFailure};
pub use line::{Line, classify, is_blank};

/// Default makefile name looked up in the working directory.
pub const DEFAULT_MAKEFILE: &str = "makefile";

/// Parse makefile text, labelling diagnostics with `name`.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] for the first line that cannot be parsed.
pub fn from_str_named(text: &str, name: &str) -> Result<Makefile, ManifestError> {
    parser::parse(text, &MakefileName::from(name))
}

/// Parse makefile text.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] for the first line that cannot be parsed.
///
/// # Examples
/// ```rust
/// use makep::manifest;
///
/// let makefile = manifest::from_str("FLAGS = -O2\nbuild: \n\tgcc $(FLAGS) -c\n").expect("parse");
/// assert_eq!(makefile.commands("build"), Some(&["gcc $(FLAGS) -c".to_owned()][..]));
///
/// let err = manifest::from_str("\tstray command").expect_err("no open target");
/// assert_eq!(err.line(), 1);
/// ```
pub fn from_str(text: &str) -> Result<Makefile, ManifestError> {
    from_str_named(text, DEFAULT_MAKEFILE)
}

/// Load a [`Makefile`] from the given file path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse. Parse
/// failures keep their [`ManifestError`] diagnostic, including the source
/// snippet.
pub fn from_path(path: impl AsRef<Path>) -> Result<Makefile> {
    let path_ref = path.as_ref();
    let data =
        fs::read_to_string(path_ref).diag_with(|| format!("failed to read {}", path_ref.display()))?;
    Ok(from_str_named(&data, &path_ref.display().to_string())?)
}

#[cfg(test)]
mod tests;
