//! Terminal-component constraint (R8).
//!
//! A component flagged `terminal` ends a dataflow: it may not declare
//! static outputs and may not have outgoing bindings.

use ac_graph::{BindingGraph, Component};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("R8 violation on '{component}': {reason}")]
pub struct TerminalViolation {
    pub component: String,
    pub reason: String,
}

/// Check R8 for `component` given the out-degree it would have.
pub fn check_terminal(
    component: &Component,
    out_degree_after: usize,
) -> Result<(), TerminalViolation> {
    if !component.terminal {
        return Ok(());
    }
    if component.has_static_outputs() {
        return Err(TerminalViolation {
            component: component.name.clone(),
            reason: format!(
                "terminal component declares {} static output(s)",
                component.outputs.len()
            ),
        });
    }
    if out_degree_after > 0 {
        return Err(TerminalViolation {
            component: component.name.clone(),
            reason: format!("terminal component would have {out_degree_after} outgoing binding(s)"),
        });
    }
    Ok(())
}

fn current_out_degree(component: &Component, graph: &BindingGraph) -> usize {
    graph
        .id_of(&component.name)
        .map_or(0, |id| graph.out_degree(id))
}

/// Check that adding `tail -> candidate` keeps both endpoints within R8.
///
/// The tail gains one outgoing binding; the candidate's out-degree is
/// unchanged, so it only fails if it already violates the rule.
pub fn check_edge(
    tail: &Component,
    candidate: &Component,
    graph: &BindingGraph,
) -> Result<(), TerminalViolation> {
    check_terminal(candidate, current_out_degree(candidate, graph))?;
    check_terminal(tail, current_out_degree(tail, graph) + 1)
}

/// List R8 violations already present in the input.
pub fn audit_terminals(components: &[Component], graph: &BindingGraph) -> Vec<TerminalViolation> {
    components
        .iter()
        .filter_map(|c| check_terminal(c, current_out_degree(c, graph)).err())
        .collect()
}
