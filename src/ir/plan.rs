//! Build plan structures.
//!
//! A [`BuildPlan`] is the fully resolved output of one run: the targets
//! reachable from the start target in dependency order, each with its
//! commands already substituted. Targets without commands contribute no step.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// One target's substituted command block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Target the commands belong to.
    pub target: String,
    /// Commands with every variable reference replaced.
    pub commands: Vec<String>,
}

impl PlanStep {
    /// The commands joined with newlines, as printed by the driver.
    #[must_use]
    pub fn block(&self) -> String {
        self.commands.join("\n")
    }
}

/// Ordered command blocks for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    /// Every target visited by the traversal, in dependency order.
    pub order: Vec<String>,
    /// Command blocks of the visited targets that have any, in the same order.
    pub steps: Vec<PlanStep>,
}

impl BuildPlan {
    /// Whether the plan runs no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Errors produced while resolving a makefile into a [`BuildPlan`].
#[derive(Debug, Error, Diagnostic)]
pub enum IrGenError {
    /// A command referenced a variable with no definition.
    #[error("undefined variable `{name}` in command `{command}`")]
    #[diagnostic(
        code(makep::ir::undefined_variable),
        help("Define it with a `{name} = value` line.")
    )]
    UndefinedVariable {
        /// Name inside the `$(...)` reference.
        name: String,
        /// Raw command text containing the reference.
        command: String,
    },

    /// The traversal reached a target that is still being visited.
    #[error("circular dependency detected: {}", .cycle.join(" -> "))]
    #[diagnostic(code(makep::ir::circular_dependency))]
    CircularDependency {
        /// The cycle, starting and ending at its lexically smallest target.
        cycle: Vec<String>,
    },

    /// The requested start target is declared nowhere in the makefile.
    #[error("no rule to make target `{name}`")]
    #[diagnostic(code(makep::ir::unknown_target))]
    UnknownTarget {
        /// Requested target name.
        name: String,
    },
}
