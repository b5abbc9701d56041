//! Parse errors with source locations for makefile text.
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use super::hints::hint_for;

/// Display name for a makefile used in diagnostics.
///
/// # Examples
/// ```rust
/// use makep::manifest::MakefileName;
/// let name = MakefileName::new("makefile");
/// assert_eq!(name.as_str(), "makefile");
/// ```
#[derive(Debug, Clone)]
pub struct MakefileName(String);

impl MakefileName {
    /// Wrap a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for MakefileName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for MakefileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// The line matches none of the recognised forms.
    UnrecognizedLine,
    /// A tab-indented command line with no target block open.
    CommandOutsideTarget,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedLine => f.write_str("unrecognised line"),
            Self::CommandOutsideTarget => f.write_str("command line outside a target block"),
        }
    }
}

/// Errors raised while parsing a makefile.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    /// A line could not be parsed; no partial model is produced.
    #[error("Error occurred while parsing in line {line}")]
    #[diagnostic(code(makep::manifest::parse))]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong with the line.
        failure: ParseFailure,
        /// Full makefile text, named after its source.
        #[source_code]
        src: NamedSource<String>,
        /// Span of the offending line within `src`.
        #[label("{failure}")]
        span: SourceSpan,
        /// Suggested fix, when one is known.
        #[help]
        help: Option<String>,
    },
}

impl ManifestError {
    /// Line number reported by the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse { line, .. } => *line,
        }
    }

    /// Failure kind reported by the error.
    #[must_use]
    pub const fn failure(&self) -> ParseFailure {
        match self {
            Self::Parse { failure, .. } => *failure,
        }
    }
}

/// Byte span of the 1-indexed `line` within `text`, excluding its newline.
fn line_span(text: &str, line: usize) -> SourceSpan {
    let mut offset = 0usize;
    for (idx, segment) in text.split('\n').enumerate() {
        if idx + 1 == line {
            return SourceSpan::new(offset.into(), segment.len());
        }
        offset += segment.len() + 1;
    }
    SourceSpan::new(text.len().into(), 0)
}

/// Build a [`ManifestError::Parse`] for `line` of `text`.
pub(crate) fn parse_error(
    text: &str,
    name: &MakefileName,
    line: usize,
    raw: &str,
    failure: ParseFailure,
) -> ManifestError {
    ManifestError::Parse {
        line,
        failure,
        src: NamedSource::new(name.as_str(), text.to_owned()),
        span: line_span(text, line),
        help: hint_for(raw, failure).map(str::to_owned),
    }
}
