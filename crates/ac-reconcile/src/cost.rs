//! Edge cost model and tie-breaking.

use std::cmp::Ordering;

use ac_core::{ComponentId, Real};
use ac_graph::ComponentType;

/// Default penalty for ending a corrective edge in an API endpoint.
pub const API_ENDPOINT_PENALTY: Real = 0.25;

/// Cost of a candidate `tail -> candidate` edge for one source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCost {
    /// Directed hops from the source to the tail.
    pub hops: usize,
    /// Undirected hops from the candidate to the nearest other source (0 when disabled).
    pub contention: usize,
    pub api_penalty: Real,
}

impl EdgeCost {
    pub fn total(&self) -> Real {
        self.hops as Real + self.contention as Real + self.api_penalty
    }
}

/// Tie-break rank of a candidate type; lower wins.
pub fn type_priority(kind: &ComponentType) -> u8 {
    match kind {
        ComponentType::Store => 0,
        ComponentType::Sink => 1,
        ComponentType::ApiEndpoint => 2,
        _ => 3,
    }
}

/// A scored `tail -> candidate` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEdge {
    pub tail: ComponentId,
    pub tail_name: String,
    pub candidate: ComponentId,
    pub candidate_name: String,
    pub priority: u8,
    pub cost: EdgeCost,
}

impl ScoredEdge {
    /// Total order: cost, type priority, candidate name, tail name.
    pub fn rank(&self, other: &Self) -> Ordering {
        self.cost
            .total()
            .total_cmp(&other.cost.total())
            .then(self.priority.cmp(&other.priority))
            .then_with(|| self.candidate_name.cmp(&other.candidate_name))
            .then_with(|| self.tail_name.cmp(&other.tail_name))
    }
}

/// Sort scored edges best-first.
pub fn rank_edges(edges: &mut [ScoredEdge]) {
    edges.sort_by(ScoredEdge::rank);
}
