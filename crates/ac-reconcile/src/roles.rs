//! Declared and effective component roles.
//!
//! The declared role comes from the component type alone. The effective
//! role starts from the declared one and is overridden by topology: what a
//! component is actually wired to decides whether it behaves as a source,
//! a transformer, or a sink.

use std::collections::BTreeMap;

use ac_core::ComponentId;
use ac_graph::{BindingGraph, Component, ComponentType};
use serde::{Deserialize, Serialize};

use crate::catalog::ComponentCatalog;
use crate::error::{ReconcileError, ReconcileResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Source,
    Transformer,
    Sink,
}

/// Role implied by the static component type.
pub fn declared_role(kind: &ComponentType) -> Role {
    match kind {
        ComponentType::Source => Role::Source,
        ComponentType::Sink | ComponentType::Store | ComponentType::ApiEndpoint => Role::Sink,
        ComponentType::Transformer | ComponentType::Other(_) => Role::Transformer,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleView {
    pub declared: Role,
    pub effective: Role,
    /// Why `effective` differs from `declared` (empty when they agree).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

impl RoleView {
    pub fn new(declared: Role) -> Self {
        Self {
            declared,
            effective: declared,
            reasons: Vec::new(),
        }
    }

    fn overridden(declared: Role, effective: Role, reason: impl Into<String>) -> Self {
        Self {
            declared,
            effective,
            reasons: vec![reason.into()],
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.declared != self.effective
    }
}

/// Classify a component from its static fields and current degrees.
pub fn classify(component: &Component, in_degree: usize, out_degree: usize) -> RoleView {
    let declared = declared_role(&component.kind);

    if component.terminal {
        return if declared == Role::Sink {
            RoleView::new(declared)
        } else {
            RoleView::overridden(declared, Role::Sink, "flagged terminal")
        };
    }

    match declared {
        Role::Source if in_degree > 0 => RoleView::overridden(
            declared,
            Role::Transformer,
            format!("declared source has {in_degree} inbound binding(s)"),
        ),
        Role::Sink if out_degree > 0 => RoleView::overridden(
            declared,
            Role::Transformer,
            format!("declared sink has {out_degree} outbound binding(s)"),
        ),
        Role::Transformer if in_degree == 0 && out_degree > 0 => RoleView::overridden(
            declared,
            Role::Source,
            "no inbound bindings; feeds downstream components",
        ),
        _ => RoleView::new(declared),
    }
}

/// Role views keyed by component name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleViews {
    views: BTreeMap<String, RoleView>,
}

impl RoleViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every component against the current graph.
    pub fn compute(components: &[Component], graph: &BindingGraph) -> ReconcileResult<Self> {
        let catalog = ComponentCatalog::new(components, graph)?;
        let mut views = Self::new();
        for id in graph.ids() {
            let component = catalog.get(id);
            views.insert(
                component.name.clone(),
                classify(component, graph.in_degree(id), graph.out_degree(id)),
            );
        }
        Ok(views)
    }

    /// Re-classify one component after its degrees changed.
    ///
    /// Returns true if the effective role changed.
    pub fn refresh(&mut self, component: &Component, graph: &BindingGraph) -> ReconcileResult<bool> {
        let id = graph
            .id_of(&component.name)
            .ok_or_else(|| ac_core::AcError::UnknownComponent {
                name: component.name.clone(),
            })?;
        let view = classify(component, graph.in_degree(id), graph.out_degree(id));
        let changed = self
            .views
            .get(&component.name)
            .is_none_or(|old| old.effective != view.effective);
        self.views.insert(component.name.clone(), view);
        Ok(changed)
    }

    pub fn insert(&mut self, name: impl Into<String>, view: RoleView) {
        self.views.insert(name.into(), view);
    }

    pub fn get(&self, name: &str) -> Option<&RoleView> {
        self.views.get(name)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoleView)> {
        self.views.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names with the given effective role, in name order.
    pub fn with_effective(&self, role: Role) -> Vec<&str> {
        self.iter()
            .filter(|(_, v)| v.effective == role)
            .map(|(k, _)| k)
            .collect()
    }

    pub fn sources(&self) -> Vec<&str> {
        self.with_effective(Role::Source)
    }

    pub fn sinks(&self) -> Vec<&str> {
        self.with_effective(Role::Sink)
    }

    /// Effective role of a graph component, failing if no view exists.
    pub(crate) fn effective_of(
        &self,
        catalog: &ComponentCatalog<'_>,
        id: ComponentId,
    ) -> ReconcileResult<Role> {
        let name = catalog.name(id);
        self.views
            .get(name)
            .map(|v| v.effective)
            .ok_or_else(|| ReconcileError::MissingRole {
                name: name.to_string(),
            })
    }
}
