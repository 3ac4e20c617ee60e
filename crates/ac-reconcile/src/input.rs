//! Reconciliation input documents.
//!
//! A document carries the component list and the binding list of one
//! blueprint, in YAML or JSON. Bindings may use either `from`/`to` or
//! `source`/`target`; they are written back as `from`/`to`.

use std::path::Path;

use ac_graph::{Binding, BindingGraph, Component};
use serde::{Deserialize, Serialize};

use crate::engine::Reconciler;
use crate::error::ReconcileResult;
use crate::roles::RoleViews;
use crate::settings::ReconcileSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileInput {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// Result of reconciling a document.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// Bindings appended by this run, in insertion order.
    pub added: Vec<Binding>,
    /// Role views after reconciliation.
    pub roles: RoleViews,
    /// The graph after reconciliation.
    pub graph: BindingGraph,
}

impl ReconcileInput {
    pub fn new(components: Vec<Component>, bindings: Vec<Binding>) -> Self {
        Self {
            components,
            bindings,
        }
    }

    pub fn from_yaml_str(content: &str) -> ReconcileResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ReconcileResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> ReconcileResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> ReconcileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_yaml(path: &Path) -> ReconcileResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn load_json(path: &Path) -> ReconcileResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn save_yaml(&self, path: &Path) -> ReconcileResult<()> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    pub fn save_json(&self, path: &Path) -> ReconcileResult<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Build the graph and role views from this document.
    pub fn prepare(&self) -> ReconcileResult<(BindingGraph, RoleViews)> {
        let graph = BindingGraph::from_model(&self.components, &self.bindings)?;
        let roles = RoleViews::compute(&self.components, &graph)?;
        Ok((graph, roles))
    }

    /// Reconcile the document in place; added bindings are appended to
    /// `self.bindings`.
    pub fn reconcile(&mut self, settings: &ReconcileSettings) -> ReconcileResult<ReconcileOutcome> {
        let (mut graph, mut roles) = self.prepare()?;
        let added = Reconciler::new(&self.components, settings.clone()).reconcile(
            &mut self.bindings,
            &mut graph,
            &mut roles,
        )?;
        Ok(ReconcileOutcome {
            added,
            roles,
            graph,
        })
    }
}
