//! Append-only directed binding graph.

use std::collections::HashMap;

use ac_core::{AcResult, ComponentId};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::GraphError;

/// Directed graph over component names.
///
/// Components live in an arena: the node index of a component equals its
/// `ComponentId` index, and a name lookup maps back to ids. Edges can be
/// added but never removed, so degrees only grow over the graph's lifetime.
/// Parallel edges are never stored. A self-loop can only come from the input
/// bindings; [`BindingGraph::add_edge`] refuses to create one.
#[derive(Debug, Clone)]
pub struct BindingGraph {
    pub(crate) inner: DiGraph<ComponentId, ()>,
    pub(crate) names: Vec<String>,
    pub(crate) lookup: HashMap<String, ComponentId>,
}

impl BindingGraph {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Look up a component id by name.
    pub fn id_of(&self, name: &str) -> Option<ComponentId> {
        self.lookup.get(name).copied()
    }

    /// Name of a component (None if the id is out of range).
    pub fn name_of(&self, id: ComponentId) -> Option<&str> {
        self.names.get(id.as_usize()).map(String::as_str)
    }

    /// All component ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.inner.node_indices().map(|ix| self.inner[ix])
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        id.as_usize() < self.names.len()
    }

    pub(crate) fn node(&self, id: ComponentId) -> Option<NodeIndex> {
        self.contains(id).then(|| NodeIndex::new(id.as_usize()))
    }

    fn neighbors(&self, id: ComponentId, dir: Direction) -> Vec<ComponentId> {
        let Some(ix) = self.node(id) else {
            return Vec::new();
        };
        let mut out: Vec<ComponentId> = self
            .inner
            .neighbors_directed(ix, dir)
            .map(|n| self.inner[n])
            .collect();
        // petgraph yields neighbours newest-first; callers want a stable order
        out.sort();
        out
    }

    /// Direct successors of a component, in id order.
    pub fn successors(&self, id: ComponentId) -> Vec<ComponentId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Direct predecessors of a component, in id order.
    pub fn predecessors(&self, id: ComponentId) -> Vec<ComponentId> {
        self.neighbors(id, Direction::Incoming)
    }

    pub fn out_degree(&self, id: ComponentId) -> usize {
        self.node(id).map_or(0, |ix| {
            self.inner.neighbors_directed(ix, Direction::Outgoing).count()
        })
    }

    pub fn in_degree(&self, id: ComponentId) -> usize {
        self.node(id).map_or(0, |ix| {
            self.inner.neighbors_directed(ix, Direction::Incoming).count()
        })
    }

    pub fn has_edge(&self, from: ComponentId, to: ComponentId) -> bool {
        match (self.node(from), self.node(to)) {
            (Some(a), Some(b)) => self.inner.contains_edge(a, b),
            _ => false,
        }
    }

    /// Insert an edge. Returns `Ok(false)` if the edge already existed.
    pub fn add_edge(&mut self, from: ComponentId, to: ComponentId) -> AcResult<bool> {
        let a = self.node(from).ok_or(GraphError::IdNotFound { id: from })?;
        let b = self.node(to).ok_or(GraphError::IdNotFound { id: to })?;
        if a == b {
            return Err(GraphError::SelfLoop {
                name: self.names[a.index()].clone(),
            }
            .into());
        }
        if self.inner.contains_edge(a, b) {
            return Ok(false);
        }
        self.inner.add_edge(a, b, ());
        Ok(true)
    }

    /// Edge insertion used while building from validated input. Self-loops
    /// are kept; duplicates are not.
    pub(crate) fn insert_edge(&mut self, from: ComponentId, to: ComponentId) -> bool {
        let (Some(a), Some(b)) = (self.node(from), self.node(to)) else {
            return false;
        };
        if self.inner.contains_edge(a, b) {
            return false;
        }
        self.inner.add_edge(a, b, ());
        true
    }

    /// Insert an edge by component names.
    pub fn add_edge_by_name(&mut self, from: &str, to: &str) -> AcResult<bool> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        self.add_edge(a, b)
    }

    /// All edges as `(from, to)` id pairs, sorted.
    pub fn edges(&self) -> Vec<(ComponentId, ComponentId)> {
        let mut out: Vec<_> = self
            .inner
            .raw_edges()
            .iter()
            .map(|e| (self.inner[e.source()], self.inner[e.target()]))
            .collect();
        out.sort();
        out
    }

    pub(crate) fn require(&self, name: &str) -> AcResult<ComponentId> {
        self.id_of(name).ok_or_else(|| ac_core::AcError::UnknownComponent {
            name: name.to_string(),
        })
    }
}
