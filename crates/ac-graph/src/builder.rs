//! Incremental graph builder.

use std::collections::HashMap;

use ac_core::{AcResult, ComponentId};
use petgraph::graph::DiGraph;

use crate::graph::BindingGraph;
use crate::model::{Binding, Component};
use crate::validate;

/// Builder for constructing a binding graph incrementally.
///
/// Use `add_component` and `add_binding` to describe the graph,
/// then call `build()` to validate it and produce a `BindingGraph`.
/// Names are resolved at build time, so bindings may be added before
/// the components they reference.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: Vec<String>,
    bindings: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from component and binding records.
    pub fn from_model(components: &[Component], bindings: &[Binding]) -> Self {
        let mut builder = Self::new();
        for component in components {
            builder.add_component(component.name.clone());
        }
        for binding in bindings {
            builder.add_binding(binding.from.clone(), binding.to.clone());
        }
        builder
    }

    /// Add a component and return the id it will have in the built graph.
    pub fn add_component(&mut self, name: impl Into<String>) -> ComponentId {
        let id = ComponentId::from_index(self.names.len() as u32);
        self.names.push(name.into());
        id
    }

    /// Add a binding between two components, by name.
    pub fn add_binding(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.bindings.push((from.into(), to.into()));
    }

    /// Build and validate the graph.
    ///
    /// Repeated bindings collapse into a single edge. Feedback bindings
    /// (a component bound to itself) are kept.
    pub fn build(self) -> AcResult<BindingGraph> {
        validate::validate_names(&self.names)?;

        let lookup: HashMap<String, ComponentId> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), ComponentId::from_index(i as u32)))
            .collect();

        let edges = validate::resolve_bindings(&lookup, &self.bindings)?;

        let mut inner = DiGraph::with_capacity(self.names.len(), edges.len());
        for i in 0..self.names.len() {
            inner.add_node(ComponentId::from_index(i as u32));
        }

        let mut graph = BindingGraph {
            inner,
            names: self.names,
            lookup,
        };
        for (a, b) in edges {
            graph.insert_edge(a, b);
        }
        Ok(graph)
    }
}

impl BindingGraph {
    /// Build a graph straight from component and binding records.
    pub fn from_model(components: &[Component], bindings: &[Binding]) -> AcResult<Self> {
        GraphBuilder::from_model(components, bindings).build()
    }
}
