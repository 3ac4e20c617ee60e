//! Property tests over random blueprints.

use ac_graph::{Binding, BindingGraph, Component};
use ac_reconcile::{ReconcileSettings, Reconciler, Role, RoleViews};
use proptest::prelude::*;

const TYPES: &[&str] = &["Source", "Transformer", "Sink", "Store", "APIEndpoint", "Router"];

#[derive(Debug, Clone)]
struct Blueprint {
    components: Vec<Component>,
    bindings: Vec<Binding>,
}

fn blueprint_strategy() -> impl Strategy<Value = Blueprint> {
    (2_usize..10).prop_flat_map(|n| {
        let component = (0..TYPES.len(), prop::bool::weighted(0.15), prop::bool::weighted(0.1));
        let edge = (0..n, 0..n).prop_filter("no self-loops", |(a, b)| a != b);
        (
            prop::collection::vec(component, n),
            prop::collection::vec(edge, 0..(2 * n)),
        )
            .prop_map(|(specs, edges)| {
                let components = specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (t, terminal, outputs))| {
                        let mut c = Component::new(format!("c{i}"), TYPES[t]);
                        c.terminal = terminal;
                        if outputs {
                            c.outputs = vec!["out".to_string()];
                        }
                        c
                    })
                    .collect();
                let bindings = edges
                    .into_iter()
                    .map(|(a, b)| Binding::new(format!("c{a}"), format!("c{b}")))
                    .collect();
                Blueprint {
                    components,
                    bindings,
                }
            })
    })
}

struct Run {
    result: Result<Vec<Binding>, ac_reconcile::ReconcileError>,
    bindings: Vec<Binding>,
    graph: BindingGraph,
    roles: RoleViews,
}

fn run(bp: &Blueprint, max_corrections: usize) -> Run {
    let mut bindings = bp.bindings.clone();
    let mut graph = BindingGraph::from_model(&bp.components, &bindings).unwrap();
    let mut roles = RoleViews::compute(&bp.components, &graph).unwrap();
    let settings = ReconcileSettings::default().with_max_corrections(max_corrections);
    let result = Reconciler::new(&bp.components, settings).reconcile(&mut bindings, &mut graph, &mut roles);
    Run {
        result,
        bindings,
        graph,
        roles,
    }
}

proptest! {
    #[test]
    fn existing_bindings_are_kept(bp in blueprint_strategy(), rounds in 0_usize..4) {
        let out = run(&bp, rounds);
        prop_assert!(out.bindings.len() >= bp.bindings.len());
        prop_assert_eq!(&out.bindings[..bp.bindings.len()], &bp.bindings[..]);
        for b in &out.bindings[bp.bindings.len()..] {
            prop_assert!(b.is_generated());
        }
        if let Ok(added) = &out.result {
            prop_assert_eq!(added.as_slice(), &out.bindings[bp.bindings.len()..]);
        }
    }

    #[test]
    fn terminal_components_gain_no_outgoing_edges(bp in blueprint_strategy()) {
        let before = BindingGraph::from_model(&bp.components, &bp.bindings).unwrap();
        let out = run(&bp, 3);
        for c in bp.components.iter().filter(|c| c.terminal) {
            let id = before.id_of(&c.name).unwrap();
            prop_assert_eq!(out.graph.out_degree(id), before.out_degree(id));
        }
    }

    #[test]
    fn success_means_every_source_reaches_a_sink(bp in blueprint_strategy()) {
        let out = run(&bp, 3);
        if out.result.is_ok() {
            let sinks = out.roles.sinks();
            for source in out.roles.sources() {
                let reaches = sinks.iter().any(|sink| out.graph.has_path_by_name(source, sink));
                prop_assert!(reaches, "source {} reaches no sink", source);
            }
        }
    }

    #[test]
    fn maintained_roles_match_full_recompute(bp in blueprint_strategy()) {
        let out = run(&bp, 3);
        let fresh = RoleViews::compute(&bp.components, &out.graph).unwrap();
        prop_assert_eq!(out.roles, fresh);
    }

    #[test]
    fn runs_are_deterministic(bp in blueprint_strategy()) {
        let first = run(&bp, 3);
        let second = run(&bp, 3);
        prop_assert_eq!(first.bindings, second.bindings);
        prop_assert_eq!(
            first.result.as_ref().err().and_then(|e| e.details().cloned()),
            second.result.as_ref().err().and_then(|e| e.details().cloned())
        );
    }

    #[test]
    fn reconciled_output_is_a_fixed_point(bp in blueprint_strategy()) {
        let out = run(&bp, 3);
        if out.result.is_ok() {
            let again = run(&Blueprint { components: bp.components.clone(), bindings: out.bindings.clone() }, 3);
            prop_assert_eq!(again.result.unwrap().len(), 0);
            prop_assert_eq!(again.bindings, out.bindings);
        }
    }

    #[test]
    fn added_edges_end_in_sink_capable_components(bp in blueprint_strategy()) {
        let out = run(&bp, 3);
        let before = BindingGraph::from_model(&bp.components, &bp.bindings).unwrap();
        let roles_before = RoleViews::compute(&bp.components, &before).unwrap();
        for b in &out.bindings[bp.bindings.len()..] {
            let c = bp.components.iter().find(|c| c.name == b.to).unwrap();
            let sink_capable = (c.kind.is_sink_type() && !c.has_static_outputs())
                || c.terminal
                || roles_before.get(&c.name).map(|v| v.effective) == Some(Role::Sink);
            prop_assert!(sink_capable, "{} is not sink-capable", b.to);
        }
    }
}
