//! Integration tests for ac-graph.

use ac_graph::{Binding, BindingGraph, Component, ComponentType, GraphBuilder};

#[test]
fn build_chain_graph() {
    // ingest -> parse -> store
    let mut builder = GraphBuilder::new();
    let ingest = builder.add_component("ingest");
    let parse = builder.add_component("parse");
    let store = builder.add_component("store");
    builder.add_binding("ingest", "parse");
    builder.add_binding("parse", "store");

    let graph = builder.build().unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.out_degree(ingest), 1);
    assert_eq!(graph.in_degree(ingest), 0);
    assert_eq!(graph.out_degree(store), 0);
    assert!(graph.has_path(ingest, store));
    assert_eq!(graph.edges(), vec![(ingest, parse), (parse, store)]);
}

#[test]
fn edges_only_grow() {
    let components = vec![
        Component::new("a", "Source"),
        Component::new("b", "Transformer"),
        Component::new("c", "Sink"),
    ];
    let mut graph = BindingGraph::from_model(&components, &[Binding::new("a", "b")]).unwrap();
    let before = graph.edges();

    graph.add_edge_by_name("b", "c").unwrap();
    let after = graph.edges();

    assert!(before.iter().all(|e| after.contains(e)));
    assert_eq!(after.len(), before.len() + 1);
    assert!(graph.has_path_by_name("a", "c"));
}

#[test]
fn empty_graph() {
    let graph = GraphBuilder::new().build().unwrap();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.ids().count(), 0);
}

#[test]
fn large_chain() {
    let mut builder = GraphBuilder::new();
    let mut ids = Vec::new();
    for i in 0..100 {
        ids.push(builder.add_component(format!("c{}", i)));
    }
    for i in 0..99 {
        builder.add_binding(format!("c{}", i), format!("c{}", i + 1));
    }
    let graph = builder.build().unwrap();

    assert_eq!(graph.edge_count(), 99);
    assert_eq!(graph.hop_distances(ids[0])[&ids[99]], 99);
    assert_eq!(graph.descendants(ids[0]).len(), 99);
    assert!(!graph.has_path(ids[99], ids[0]));
}

#[test]
fn yaml_records_accept_both_edge_conventions() {
    let yaml = r#"
- name: src
  type: Source
- name: api
  type: APIEndpoint
  terminal: true
- name: router
  type: Router
  outputs: [out]
"#;
    let components: Vec<Component> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(components[1].kind, ComponentType::ApiEndpoint);
    assert!(components[1].terminal);
    assert_eq!(components[2].kind, ComponentType::Other("Router".into()));
    assert_eq!(components[2].outputs, vec!["out".to_string()]);

    let json = r#"[{"from": "src", "to": "router"}, {"source": "router", "target": "api"}]"#;
    let bindings: Vec<Binding> = serde_json::from_str(json).unwrap();
    assert_eq!(bindings[1], Binding::new("router", "api"));

    let graph = BindingGraph::from_model(&components, &bindings).unwrap();
    assert!(graph.has_path_by_name("src", "api"));
}

#[test]
fn generated_bindings_serialize_provenance() {
    let b = Binding::generated("mid", "db", "reconciliation_r7", "auto");
    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["from"], "mid");
    assert_eq!(json["generated_by"], "reconciliation_r7");

    let plain = serde_json::to_value(Binding::new("a", "b")).unwrap();
    assert!(plain.get("generated_by").is_none());
}
