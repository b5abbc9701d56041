//! Target ordering, variable substitution and build plans.
//!
//! This module turns a parsed [`crate::ast::Makefile`] into a [`BuildPlan`]:
//! the targets reachable from a start target, dependencies first, each with
//! its command text substituted.
//!
//! # Examples
//!
//! ```
//! use makep::ir::{BuildPlan, PlanOptions};
//! use makep::manifest;
//!
//! let makefile = manifest::from_str("FLAGS = -O2\nbuild: \n\tgcc $(FLAGS) -c\n").expect("parse");
//! let plan = BuildPlan::from_makefile(&makefile, makefile.start_target.as_deref(), PlanOptions::default())
//!     .expect("plan");
//! assert_eq!(plan.steps[0].commands, ["gcc -O2 -c"]);
//! ```

mod cmd_interpolate;
mod from_makefile;
mod order;
mod plan;

pub use cmd_interpolate::substitute;
pub use from_makefile::PlanOptions;
pub use order::{CyclePolicy, order, order_strict};
pub use plan::{BuildPlan, IrGenError, PlanStep};
