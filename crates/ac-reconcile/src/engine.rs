//! Endpoint reconciliation engine.
//!
//! Each round partitions components by effective role, finds sources that
//! reach no sink, and for each one appends the cheapest admissible edge
//! from one of its dangling tails to a sink-capable candidate. Rounds stop
//! as soon as every source reaches a sink; if the round budget runs out
//! first the call fails with diagnostics.

use std::collections::BTreeSet;

use ac_core::ComponentId;
use ac_graph::{Binding, BindingGraph, Component, ComponentType};
use tracing::{debug, info, warn};

use crate::catalog::ComponentCatalog;
use crate::constraints::{audit_terminals, check_edge};
use crate::cost::{EdgeCost, ScoredEdge, rank_edges, type_priority};
use crate::error::{REPLAN_REQUIRED_CODE, ReconcileError, ReconcileResult, ReconciliationFailure};
use crate::roles::{Role, RoleViews};
use crate::settings::ReconcileSettings;

/// Provenance tag on bindings added by the reconciler.
pub const GENERATED_BY: &str = "reconciliation_r7";

/// Source and sink sets for one round.
#[derive(Debug, Default)]
struct Partition {
    sources: BTreeSet<ComponentId>,
    sinks: BTreeSet<ComponentId>,
}

impl Partition {
    fn from_roles(
        roles: &RoleViews,
        catalog: &ComponentCatalog<'_>,
        graph: &BindingGraph,
    ) -> ReconcileResult<Self> {
        let mut partition = Self::default();
        for id in graph.ids() {
            match roles.effective_of(catalog, id)? {
                Role::Source => {
                    partition.sources.insert(id);
                }
                Role::Sink => {
                    partition.sinks.insert(id);
                }
                Role::Transformer => {}
            }
        }
        Ok(partition)
    }

    /// Sources with no path to any sink, in name order.
    fn unresolved(&self, catalog: &ComponentCatalog<'_>, graph: &BindingGraph) -> Vec<ComponentId> {
        let mut out: Vec<ComponentId> = self
            .sources
            .iter()
            .copied()
            .filter(|&s| !graph.reaches_any(s, &self.sinks))
            .collect();
        catalog.sort_by_name(&mut out);
        out
    }
}

/// Components reachable from `source` (itself included) with no outgoing
/// edges, in name order. Falls back to the source itself.
fn dangling_tails(
    source: ComponentId,
    catalog: &ComponentCatalog<'_>,
    graph: &BindingGraph,
) -> Vec<ComponentId> {
    let mut tails: Vec<ComponentId> = std::iter::once(source)
        .chain(graph.descendants(source))
        .filter(|&id| graph.out_degree(id) == 0)
        .collect();
    if tails.is_empty() {
        tails.push(source);
    }
    catalog.sort_by_name(&mut tails);
    tails
}

/// Appends corrective bindings so every source reaches a sink.
#[derive(Debug, Clone)]
pub struct Reconciler<'a> {
    components: &'a [Component],
    settings: ReconcileSettings,
}

impl<'a> Reconciler<'a> {
    pub fn new(components: &'a [Component], settings: ReconcileSettings) -> Self {
        Self {
            components,
            settings,
        }
    }

    /// Reconciler whose settings come from the process-wide flags.
    pub fn with_flags(components: &'a [Component]) -> Self {
        Self::new(components, ReconcileSettings::from_flags())
    }

    pub fn settings(&self) -> &ReconcileSettings {
        &self.settings
    }

    /// Run up to `max_corrections` rounds of reconciliation.
    ///
    /// `bindings`, `graph`, and `roles` are updated in place and must describe
    /// the same components as `self`. Returns the bindings that were
    /// appended. Fails with [`ReconcileError::ReplanRequired`] if some source
    /// still reaches no sink once the round budget is spent; edges added
    /// before the failure stay in place.
    pub fn reconcile(
        &self,
        bindings: &mut Vec<Binding>,
        graph: &mut BindingGraph,
        roles: &mut RoleViews,
    ) -> ReconcileResult<Vec<Binding>> {
        self.settings.validate()?;
        let catalog = ComponentCatalog::new(self.components, graph)?;

        for violation in audit_terminals(self.components, graph) {
            warn!(component = %violation.component, reason = %violation.reason, "input already violates R8");
        }

        let mut added = Vec::new();
        for round in 1..=self.settings.max_corrections {
            let partition = Partition::from_roles(roles, &catalog, graph)?;
            let unresolved = partition.unresolved(&catalog, graph);
            if unresolved.is_empty() {
                debug!(round, added = added.len(), "every source reaches a sink");
                return Ok(added);
            }
            debug!(
                round,
                unresolved = unresolved.len(),
                sinks = partition.sinks.len(),
                "starting reconciliation round"
            );

            for source in unresolved {
                if graph.reaches_any(source, &partition.sinks) {
                    debug!(source = %catalog.name(source), "resolved earlier in this round");
                    continue;
                }
                let Some(edge) = self.best_edge(source, &partition, &catalog, graph, roles)? else {
                    debug!(source = %catalog.name(source), "no admissible corrective edge");
                    continue;
                };
                let binding = self.commit(source, &edge, &catalog, graph, roles)?;
                bindings.push(binding.clone());
                added.push(binding);
            }
        }

        let partition = Partition::from_roles(roles, &catalog, graph)?;
        let unresolved = partition.unresolved(&catalog, graph);
        if unresolved.is_empty() {
            return Ok(added);
        }

        let failure = self.failure(&unresolved, &partition, &catalog, graph);
        warn!(
            code = %failure.code,
            unresolved = ?failure.unresolved_sources,
            "endpoint reconciliation exhausted its correction budget"
        );
        Err(ReconcileError::ReplanRequired(failure))
    }

    /// Components an edge may end in: sink-typed components without static
    /// outputs, terminal components, and current effective sinks.
    fn is_candidate(
        &self,
        id: ComponentId,
        catalog: &ComponentCatalog<'_>,
        roles: &RoleViews,
    ) -> ReconcileResult<bool> {
        let component = catalog.get(id);
        if (component.kind.is_sink_type() && !component.has_static_outputs()) || component.terminal
        {
            return Ok(true);
        }
        Ok(roles.effective_of(catalog, id)? == Role::Sink)
    }

    /// Cheapest `tail -> candidate` edge for `source` that passes R8.
    fn best_edge(
        &self,
        source: ComponentId,
        partition: &Partition,
        catalog: &ComponentCatalog<'_>,
        graph: &BindingGraph,
        roles: &RoleViews,
    ) -> ReconcileResult<Option<ScoredEdge>> {
        let hops = graph.hop_distances(source);
        let tails = dangling_tails(source, catalog, graph);

        // An edge into something the source already reaches adds no new path.
        let mut candidates = Vec::new();
        for id in graph.ids() {
            if !hops.contains_key(&id) && self.is_candidate(id, catalog, roles)? {
                candidates.push(id);
            }
        }
        if candidates.is_empty() {
            return Ok(None);
        }

        let contention = if self.settings.contention {
            let others: BTreeSet<ComponentId> = partition
                .sources
                .iter()
                .copied()
                .filter(|&s| s != source)
                .collect();
            Some(graph.undirected_distances_from(&others))
        } else {
            None
        };

        let mut scored = Vec::with_capacity(tails.len() * candidates.len());
        for &tail in &tails {
            let tail_hops = hops.get(&tail).copied().unwrap_or(0);
            for &candidate in &candidates {
                let component = catalog.get(candidate);
                let cost = EdgeCost {
                    hops: tail_hops,
                    contention: contention
                        .as_ref()
                        .and_then(|d| d.get(&candidate).copied())
                        .unwrap_or(0),
                    api_penalty: if component.kind == ComponentType::ApiEndpoint {
                        self.settings.api_penalty
                    } else {
                        0.0
                    },
                };
                scored.push(ScoredEdge {
                    tail,
                    tail_name: catalog.name(tail).to_string(),
                    candidate,
                    candidate_name: component.name.clone(),
                    priority: type_priority(&component.kind),
                    cost,
                });
            }
        }
        rank_edges(&mut scored);

        for edge in scored {
            match check_edge(catalog.get(edge.tail), catalog.get(edge.candidate), graph) {
                Ok(()) => return Ok(Some(edge)),
                Err(violation) => warn!(
                    source = %catalog.name(source),
                    tail = %edge.tail_name,
                    candidate = %edge.candidate_name,
                    %violation,
                    "rejected corrective edge"
                ),
            }
        }
        Ok(None)
    }

    fn commit(
        &self,
        source: ComponentId,
        edge: &ScoredEdge,
        catalog: &ComponentCatalog<'_>,
        graph: &mut BindingGraph,
        roles: &mut RoleViews,
    ) -> ReconcileResult<Binding> {
        graph.add_edge(edge.tail, edge.candidate)?;
        let binding = Binding::generated(
            edge.tail_name.clone(),
            edge.candidate_name.clone(),
            GENERATED_BY,
            format!(
                "Auto-added to connect source '{}' to sink '{}' (tail '{}')",
                catalog.name(source),
                edge.candidate_name,
                edge.tail_name
            ),
        );

        let flipped = roles.refresh(catalog.get(edge.tail), graph)?;
        roles.refresh(catalog.get(edge.candidate), graph)?;

        info!(
            source = %catalog.name(source),
            tail = %edge.tail_name,
            sink = %edge.candidate_name,
            cost = edge.cost.total(),
            tail_role_changed = flipped,
            "added corrective binding"
        );
        Ok(binding)
    }

    fn failure(
        &self,
        unresolved: &[ComponentId],
        partition: &Partition,
        catalog: &ComponentCatalog<'_>,
        graph: &BindingGraph,
    ) -> ReconciliationFailure {
        let mut sinks: Vec<ComponentId> = partition.sinks.iter().copied().collect();
        catalog.sort_by_name(&mut sinks);
        let first_sink = sinks.first().map(|&id| catalog.name(id));

        let suggested_edges = match first_sink {
            Some(sink) => unresolved
                .iter()
                .filter_map(|&s| dangling_tails(s, catalog, graph).first().copied())
                .map(|tail| format!("{} -> {}", catalog.name(tail), sink))
                .collect(),
            None => Vec::new(),
        };

        ReconciliationFailure {
            code: REPLAN_REQUIRED_CODE.to_string(),
            unresolved_sources: unresolved
                .iter()
                .map(|&s| catalog.name(s).to_string())
                .collect(),
            suggested_edges,
        }
    }
}
