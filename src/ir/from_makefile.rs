//! Makefile-to-plan conversion.

use tracing::{debug, warn};

use crate::ast::Makefile;

use super::{
    cmd_interpolate::substitute,
    order::{CyclePolicy, order_with},
    plan::{BuildPlan, IrGenError, PlanStep},
};

/// Checks applied while building a plan.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlanOptions {
    /// Treatment of dependency cycles.
    pub cycles: CyclePolicy,
    /// Fail when the start target appears nowhere in the makefile instead of
    /// treating it as a command-less leaf.
    pub require_known_start: bool,
}

impl PlanOptions {
    /// Options that turn cycles and undeclared start targets into errors.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            cycles: CyclePolicy::Reject,
            require_known_start: true,
        }
    }
}

impl BuildPlan {
    /// Resolve `makefile` into a plan starting from `start`.
    ///
    /// With no start target the plan is empty. Every command is substituted
    /// before the plan is returned, so an undefined variable anywhere in the
    /// reachable targets fails the whole plan.
    ///
    /// # Errors
    ///
    /// Returns [`IrGenError::UndefinedVariable`] for an unresolved reference,
    /// and, depending on `options`, [`IrGenError::CircularDependency`] or
    /// [`IrGenError::UnknownTarget`].
    ///
    /// # Examples
    /// ```rust
    /// use makep::ir::{BuildPlan, PlanOptions};
    /// use makep::manifest;
    ///
    /// let makefile = manifest::from_str("CC = gcc\nall: main.o\n\t$(CC) main.o\n").expect("parse");
    /// let plan = BuildPlan::from_makefile(&makefile, Some("all"), PlanOptions::default())
    ///     .expect("plan");
    /// assert_eq!(plan.order, ["main.o", "all"]);
    /// assert_eq!(plan.steps[0].block(), "gcc main.o");
    /// ```
    pub fn from_makefile(
        makefile: &Makefile,
        start: Option<&str>,
        options: PlanOptions,
    ) -> Result<Self, IrGenError> {
        let Some(start) = start else {
            warn!("makefile declares no targets; nothing to do");
            return Ok(Self::default());
        };
        if !makefile.mentions(start) {
            if options.require_known_start {
                return Err(IrGenError::UnknownTarget {
                    name: start.to_owned(),
                });
            }
            warn!(start, "start target does not appear in the makefile");
        }

        let order = order_with(&makefile.graph, start, options.cycles)?;
        debug!(?order, "resolved target order");

        let mut steps = Vec::new();
        for target in &order {
            if let Some(step) = plan_step(makefile, target)? {
                steps.push(step);
            }
        }
        Ok(Self {
            order: order.into_iter().map(str::to_owned).collect(),
            steps,
        })
    }
}

/// Substitute the commands of `target`; `None` when its block is empty.
fn plan_step(makefile: &Makefile, target: &str) -> Result<Option<PlanStep>, IrGenError> {
    let Some(commands) = makefile.commands(target) else {
        return Ok(None);
    };
    // A block of one empty command prints nothing, matching an empty block.
    if commands.join("\n").is_empty() {
        return Ok(None);
    }
    let commands = commands
        .iter()
        .map(|command| substitute(command, &makefile.vars))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(PlanStep {
        target: target.to_owned(),
        commands,
    }))
}
