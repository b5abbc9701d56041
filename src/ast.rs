//! Makefile model structures.
//!
//! These types hold the result of a single parse of a makefile: the variable
//! bindings, the first declared target, the dependency graph and the raw
//! command lists of each target. They are populated once by
//! [`crate::manifest`] and only read afterwards.
//!
//! ```rust
//! use makep::manifest;
//!
//! let makefile = manifest::from_str("CC = gcc\nall: main.o\n\tcc main.o\n").expect("parse");
//! assert_eq!(makefile.start_target.as_deref(), Some("all"));
//! assert_eq!(makefile.vars.get("CC").map(String::as_str), Some("gcc"));
//! ```

use indexmap::IndexMap;
use serde::Serialize;

/// Variable name to raw, unsubstituted definition text.
pub type Vars = IndexMap<String, String>;

/// Target name to its declared dependencies, in declaration order.
///
/// Duplicates and self references are kept as written. A target whose
/// dependency lines never named a dependency has no entry at all.
pub type DependencyGraph = IndexMap<String, Vec<String>>;

/// Target name to the raw text of its command lines.
pub type ActionTable = IndexMap<String, Vec<String>>;

/// A parsed makefile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Makefile {
    /// Variable definitions; a later definition replaces an earlier one.
    pub vars: Vars,

    /// The first target declared anywhere in the file, used when no target is
    /// requested explicitly.
    pub start_target: Option<String>,

    /// Dependency edges accumulated across every declaration of a target.
    pub graph: DependencyGraph,

    /// Command lists, replaced wholesale each time a target is redeclared.
    pub actions: ActionTable,
}

impl Makefile {
    /// Dependencies declared for `target`, or an empty slice when it has none.
    #[must_use]
    pub fn dependencies(&self, target: &str) -> &[String] {
        self.graph.get(target).map_or(&[], Vec::as_slice)
    }

    /// Raw commands recorded for `target`, if its block was ever closed.
    #[must_use]
    pub fn commands(&self, target: &str) -> Option<&[String]> {
        self.actions.get(target).map(Vec::as_slice)
    }

    /// Whether `target` was the subject of any dependency line.
    ///
    /// Every declared target receives an action list when its block closes,
    /// so the action table doubles as the set of declared targets.
    #[must_use]
    pub fn declares(&self, target: &str) -> bool {
        self.actions.contains_key(target)
    }

    /// Whether `target` is declared or named as a dependency anywhere.
    #[must_use]
    pub fn mentions(&self, target: &str) -> bool {
        self.declares(target) || self.graph.values().flatten().any(|dep| dep == target)
    }
}
