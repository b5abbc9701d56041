//! Dependency ordering for the target graph.
//!
//! Targets are ordered by a depth-first post-order walk from a start target:
//! each target's dependencies are emitted, in declared order, before the
//! target itself. The walk keeps an explicit frame stack so arbitrarily deep
//! dependency chains cannot exhaust the call stack.

use std::collections::HashMap;

use tracing::debug;

use crate::ast::DependencyGraph;

use super::IrGenError;

/// Tracks the visitation state of a node during the walk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VisitState {
    Visiting,
    Visited,
}

/// How the walk treats an edge leading back to a target still being visited.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CyclePolicy {
    /// Skip the edge. The target is emitted once and dependents of the cycle
    /// may appear before some of their dependencies.
    #[default]
    Truncate,
    /// Fail with [`IrGenError::CircularDependency`].
    Reject,
}

/// A node on the explicit stack together with the index of the next
/// dependency to inspect.
struct Frame<'a> {
    node: &'a str,
    next: usize,
}

struct Walker<'a> {
    graph: &'a DependencyGraph,
    policy: CyclePolicy,
    stack: Vec<Frame<'a>>,
    states: HashMap<&'a str, VisitState>,
    order: Vec<&'a str>,
}

impl<'a> Walker<'a> {
    fn new(graph: &'a DependencyGraph, policy: CyclePolicy) -> Self {
        Self {
            graph,
            policy,
            stack: Vec::new(),
            states: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn enter(&mut self, node: &'a str) {
        self.states.insert(node, VisitState::Visiting);
        self.stack.push(Frame { node, next: 0 });
    }

    /// Next dependency of the top frame, advancing its cursor.
    fn next_dependency(&mut self) -> Option<&'a str> {
        let graph = self.graph;
        let frame = self.stack.last_mut()?;
        let dep = graph.get(frame.node)?.get(frame.next)?;
        frame.next += 1;
        Some(dep.as_str())
    }

    fn cycle_through(&self, node: &'a str) -> Vec<String> {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.node == node)
            .unwrap_or_default();
        let mut cycle: Vec<String> = self
            .stack
            .iter()
            .skip(start)
            .map(|frame| frame.node.to_owned())
            .collect();
        cycle.push(node.to_owned());
        canonicalize_cycle(cycle)
    }

    fn walk(mut self, start: &'a str) -> Result<Vec<&'a str>, IrGenError> {
        self.enter(start);
        while let Some(top) = self.stack.last().map(|frame| frame.node) {
            let Some(dep) = self.next_dependency() else {
                self.stack.pop();
                self.states.insert(top, VisitState::Visited);
                self.order.push(top);
                continue;
            };
            match self.states.get(dep) {
                Some(VisitState::Visited) => {}
                Some(VisitState::Visiting) => match self.policy {
                    CyclePolicy::Truncate => {
                        debug!(dependent = top, dependency = dep, "skipping cyclic dependency");
                    }
                    CyclePolicy::Reject => {
                        return Err(IrGenError::CircularDependency {
                            cycle: self.cycle_through(dep),
                        });
                    }
                },
                None => {
                    if !self.graph.contains_key(dep) {
                        debug!(dependent = top, dependency = dep, "dependency has no edges");
                    }
                    self.enter(dep);
                }
            }
        }
        Ok(self.order)
    }
}

/// Order the targets reachable from `start` so dependencies come first.
///
/// `start` is emitted even when it has no entry in `graph`. Cycles are
/// truncated at the first repeated target; no target is emitted twice.
///
/// # Examples
/// ```rust
/// use makep::ast::DependencyGraph;
/// use makep::ir::order;
///
/// let mut graph = DependencyGraph::new();
/// graph.insert("all".into(), vec!["main.o".into()]);
/// graph.insert("main.o".into(), vec!["main.c".into()]);
/// assert_eq!(order(&graph, "all"), ["main.c", "main.o", "all"]);
/// assert_eq!(order(&graph, "ghost"), ["ghost"]);
/// ```
#[must_use]
pub fn order<'a>(graph: &'a DependencyGraph, start: &'a str) -> Vec<&'a str> {
    // Truncation never fails.
    Walker::new(graph, CyclePolicy::Truncate)
        .walk(start)
        .unwrap_or_default()
}

/// Order the targets reachable from `start`, rejecting cycles.
///
/// # Errors
///
/// Returns [`IrGenError::CircularDependency`] with the canonicalised cycle
/// when a dependency leads back to a target still being visited.
pub fn order_strict<'a>(
    graph: &'a DependencyGraph,
    start: &'a str,
) -> Result<Vec<&'a str>, IrGenError> {
    Walker::new(graph, CyclePolicy::Reject).walk(start)
}

/// Order with the given `policy`.
pub(crate) fn order_with<'a>(
    graph: &'a DependencyGraph,
    start: &'a str,
    policy: CyclePolicy,
) -> Result<Vec<&'a str>, IrGenError> {
    Walker::new(graph, policy).walk(start)
}

/// Rotate a closed cycle so it starts at its lexically smallest node.
fn canonicalize_cycle(mut cycle: Vec<String>) -> Vec<String> {
    if cycle.len() < 2 {
        return cycle;
    }
    let len = cycle.len() - 1;
    let start = cycle
        .iter()
        .take(len)
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(idx, _)| idx);
    let (prefix, suffix) = cycle.split_at_mut(len);
    prefix.rotate_left(start);
    if let (Some(first), Some(slot)) = (prefix.first().cloned(), suffix.first_mut()) {
        slot.clone_from(&first);
    }
    cycle
}
