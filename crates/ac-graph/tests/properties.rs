//! Property tests for graph searches.

use ac_graph::GraphBuilder;
use proptest::prelude::*;

fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2_usize..12).prop_flat_map(|n| {
        let edge = (0..n, 0..n).prop_filter("no self-loops", |(a, b)| a != b);
        (Just(n), prop::collection::vec(edge, 0..30))
    })
}

proptest! {
    #[test]
    fn descendants_agree_with_has_path((n, edges) in edges_strategy()) {
        let mut builder = GraphBuilder::new();
        let ids: Vec<_> = (0..n).map(|i| builder.add_component(format!("n{i}"))).collect();
        for (a, b) in &edges {
            builder.add_binding(format!("n{a}"), format!("n{b}"));
        }
        let graph = builder.build().unwrap();

        for &from in &ids {
            let desc = graph.descendants(from);
            let hops = graph.hop_distances(from);
            for &to in &ids {
                if to == from {
                    continue;
                }
                prop_assert_eq!(desc.contains(&to), graph.has_path(from, to));
                prop_assert_eq!(hops.contains_key(&to), graph.has_path(from, to));
            }
        }
    }

    #[test]
    fn degrees_sum_to_edge_count((n, edges) in edges_strategy()) {
        let mut builder = GraphBuilder::new();
        let ids: Vec<_> = (0..n).map(|i| builder.add_component(format!("n{i}"))).collect();
        for (a, b) in &edges {
            builder.add_binding(format!("n{a}"), format!("n{b}"));
        }
        let graph = builder.build().unwrap();

        let outs: usize = ids.iter().map(|&id| graph.out_degree(id)).sum();
        let ins: usize = ids.iter().map(|&id| graph.in_degree(id)).sum();
        prop_assert_eq!(outs, graph.edge_count());
        prop_assert_eq!(ins, graph.edge_count());
    }
}
