//! makep core library.
//!
//! This library parses makefiles made of variable definitions, dependency
//! lines and tab-indented commands, orders the targets reachable from a start
//! target so dependencies come first, and substitutes `$(NAME)` references in
//! their commands.

pub mod ast;
pub mod cli;
mod diagnostics;
pub mod ir;
pub mod manifest;
pub mod runner;
