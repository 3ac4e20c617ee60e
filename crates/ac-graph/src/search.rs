//! Reachability and distance searches over the binding graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use ac_core::ComponentId;
use petgraph::algo::{dijkstra, has_path_connecting};
use petgraph::visit::Bfs;

use crate::graph::BindingGraph;

impl BindingGraph {
    /// True if a directed path leads from `from` to `to`.
    ///
    /// A component trivially reaches itself.
    pub fn has_path(&self, from: ComponentId, to: ComponentId) -> bool {
        match (self.node(from), self.node(to)) {
            (Some(a), Some(b)) => has_path_connecting(&self.inner, a, b, None),
            _ => false,
        }
    }

    /// Name-based variant of [`BindingGraph::has_path`]; unknown names never connect.
    pub fn has_path_by_name(&self, from: &str, to: &str) -> bool {
        match (self.id_of(from), self.id_of(to)) {
            (Some(a), Some(b)) => self.has_path(a, b),
            _ => false,
        }
    }

    /// Directed hop distance from `from` to every component it reaches
    /// (including itself at distance 0).
    pub fn hop_distances(&self, from: ComponentId) -> BTreeMap<ComponentId, usize> {
        let Some(start) = self.node(from) else {
            return BTreeMap::new();
        };
        dijkstra(&self.inner, start, None, |_| 1_usize)
            .into_iter()
            .map(|(ix, d)| (self.inner[ix], d))
            .collect()
    }

    /// Components reachable from `from` through at least one edge.
    pub fn descendants(&self, from: ComponentId) -> BTreeSet<ComponentId> {
        let mut out = BTreeSet::new();
        let Some(start) = self.node(from) else {
            return out;
        };
        let mut bfs = Bfs::new(&self.inner, start);
        while let Some(ix) = bfs.next(&self.inner) {
            if ix != start {
                out.insert(self.inner[ix]);
            }
        }
        out
    }

    /// True if any of `targets` is reachable from `from` (other than `from` itself).
    pub fn reaches_any(&self, from: ComponentId, targets: &BTreeSet<ComponentId>) -> bool {
        let Some(start) = self.node(from) else {
            return false;
        };
        let mut bfs = Bfs::new(&self.inner, start);
        while let Some(ix) = bfs.next(&self.inner) {
            if ix != start && targets.contains(&self.inner[ix]) {
                return true;
            }
        }
        false
    }

    /// Undirected hop distance from every connected component to the
    /// nearest of `seeds`, computed with a single multi-source BFS.
    ///
    /// Components not connected to any seed are absent from the map.
    pub fn undirected_distances_from(
        &self,
        seeds: &BTreeSet<ComponentId>,
    ) -> BTreeMap<ComponentId, usize> {
        let mut dist = BTreeMap::new();
        let mut queue = VecDeque::new();
        for &seed in seeds {
            if self.contains(seed) && dist.insert(seed, 0).is_none() {
                queue.push_back(seed);
            }
        }
        while let Some(id) = queue.pop_front() {
            let d = dist[&id];
            let Some(ix) = self.node(id) else { continue };
            for n in self.inner.neighbors_undirected(ix) {
                let next = self.inner[n];
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    /// Undirected hop distance from `from` to the nearest of `targets`.
    pub fn nearest_undirected_distance(
        &self,
        from: ComponentId,
        targets: &BTreeSet<ComponentId>,
    ) -> Option<usize> {
        self.undirected_distances_from(targets).get(&from).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    /// a -> b -> c, d -> c, e isolated
    fn sample() -> (BindingGraph, [ComponentId; 5]) {
        let mut builder = GraphBuilder::new();
        let a = builder.add_component("a");
        let b = builder.add_component("b");
        let c = builder.add_component("c");
        let d = builder.add_component("d");
        let e = builder.add_component("e");
        builder.add_binding("a", "b");
        builder.add_binding("b", "c");
        builder.add_binding("d", "c");
        (builder.build().unwrap(), [a, b, c, d, e])
    }

    #[test]
    fn paths() {
        let (g, [a, b, c, d, e]) = sample();
        assert!(g.has_path(a, c));
        assert!(g.has_path(a, a));
        assert!(!g.has_path(c, a));
        assert!(!g.has_path(a, d));
        assert!(!g.has_path(a, e));
        let _ = b;
    }

    #[test]
    fn hops() {
        let (g, [a, b, c, d, _]) = sample();
        let dist = g.hop_distances(a);
        assert_eq!(dist.get(&a), Some(&0));
        assert_eq!(dist.get(&b), Some(&1));
        assert_eq!(dist.get(&c), Some(&2));
        assert_eq!(dist.get(&d), None);
    }

    #[test]
    fn descendant_sets() {
        let (g, [a, b, c, d, e]) = sample();
        assert_eq!(g.descendants(a), BTreeSet::from([b, c]));
        assert_eq!(g.descendants(d), BTreeSet::from([c]));
        assert!(g.descendants(e).is_empty());
        assert!(g.reaches_any(a, &BTreeSet::from([c])));
        assert!(!g.reaches_any(a, &BTreeSet::from([a, d])));
    }

    #[test]
    fn undirected_multi_source() {
        let (g, [a, b, c, d, e]) = sample();
        let dist = g.undirected_distances_from(&BTreeSet::from([d]));
        assert_eq!(dist[&d], 0);
        assert_eq!(dist[&c], 1);
        assert_eq!(dist[&b], 2);
        assert_eq!(dist[&a], 3);
        assert!(!dist.contains_key(&e));

        assert_eq!(g.nearest_undirected_distance(a, &BTreeSet::from([c, d])), Some(2));
        assert_eq!(g.nearest_undirected_distance(e, &BTreeSet::from([a])), None);
        assert_eq!(g.nearest_undirected_distance(a, &BTreeSet::new()), None);
    }
}
