/*!
# Minimum Spanning Forests

Prim's and Kruskal's algorithms over the undirected interpretation.
Weights may be any real number. On a disconnected graph both produce a
minimum spanning *forest* — one tree per connected component — and say
so through the `disconnected` flag rather than silently reporting a
single tree.

Tie-breaks are pinned so both algorithms are deterministic: Prim keys
its boundary heap by (weight, end node sort order, edge input order);
Kruskal stable-sorts by weight, which keeps input order among equal
weights. The two may select different edge sets under ties, but their
total weights always agree.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use serde::Serialize;

use super::*;
use crate::utils::UnionFind;

/// The selected forest: its edges (rendered back to records, in
/// selection order), their summed weight, and whether the input was
/// disconnected (making the result a forest of more than one tree).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeResult {
    pub edges: Vec<EdgeRecord>,
    pub total_weight: Weight,
    pub disconnected: bool,
}

/// Boundary-edge heap key for Prim: weight, then end node, then input order
#[derive(Copy, Clone, PartialEq)]
struct BoundaryEdge {
    weight: Weight,
    target: Node,
    id: EdgeId,
}

impl Eq for BoundaryEdge {}

impl Ord for BoundaryEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.target.cmp(&other.target))
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for BoundaryEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Provides minimum-spanning-forest construction as methods on the graph
pub trait SpanningForest: AdjacencyList + GraphEdges + Labels {
    /// Grows one tree per component, each started from the component's
    /// first node in sorted order, expanding along the cheapest
    /// boundary edge.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B 1\nB C 2\nA C 2\nC D 5").unwrap());
    /// let forest = g.prim_forest();
    ///
    /// assert_eq!(forest.total_weight, 8.0);
    /// assert!(!forest.disconnected);
    /// ```
    fn prim_forest(&self) -> SpanningTreeResult {
        let mut in_tree = node_set(self.number_of_nodes());
        let mut heap: BinaryHeap<Reverse<BoundaryEdge>> = BinaryHeap::new();
        let mut selected = Vec::new();
        let mut roots = 0usize;

        let push_boundary = |heap: &mut BinaryHeap<_>, in_tree: &NodeSet, u: Node| {
            for arc in self.arcs_of(u) {
                if !in_tree.contains(arc.target as usize) {
                    heap.push(Reverse(BoundaryEdge {
                        weight: arc.weight,
                        target: arc.target,
                        id: arc.id,
                    }));
                }
            }
        };

        for root in self.vertices() {
            if in_tree.contains(root as usize) {
                continue;
            }

            roots += 1;
            in_tree.insert(root as usize);
            push_boundary(&mut heap, &in_tree, root);

            while let Some(Reverse(boundary)) = heap.pop() {
                if in_tree.put(boundary.target as usize) {
                    continue;
                }
                selected.push(boundary.id);
                push_boundary(&mut heap, &in_tree, boundary.target);
            }
        }

        self.render_forest(selected, roots)
    }

    /// Scans all edges in ascending weight order, accepting an edge
    /// iff its endpoints lie in different union-find sets.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B 1\nB C 2\nA C 2\nC D 5").unwrap());
    /// let forest = g.kruskal_forest();
    ///
    /// assert_eq!(forest.total_weight, g.prim_forest().total_weight);
    /// assert_eq!(forest.edges.len(), 3);
    /// ```
    fn kruskal_forest(&self) -> SpanningTreeResult {
        let mut order = (0..self.number_of_edges()).collect_vec();
        // stable sort: equal weights stay in input order
        order.sort_by(|&a, &b| self.edge(a).weight.total_cmp(&self.edge(b).weight));

        let mut union_find = UnionFind::new(self.number_of_nodes());
        let mut selected = Vec::new();

        for id in order {
            let e = self.edge(id);
            if union_find.union(e.source, e.target) {
                selected.push(id);
            }
        }

        self.render_forest(selected, union_find.num_sets())
    }

    #[doc(hidden)]
    fn render_forest(&self, selected: Vec<EdgeId>, components: usize) -> SpanningTreeResult {
        let total_weight = selected.iter().map(|&id| self.edge(id).weight).sum();
        SpanningTreeResult {
            edges: selected.into_iter().map(|id| self.record_of(id)).collect(),
            total_weight,
            disconnected: components > 1,
        }
    }
}

impl<G: AdjacencyList + GraphEdges + Labels> SpanningForest for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::Connectivity, io::parse_edge_list, model::GraphModel};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn model(text: &str) -> GraphModel {
        GraphModel::from_records(&parse_edge_list(text).unwrap())
    }

    /// Exhaustive minimum over all acyclic edge subsets that leave the
    /// component count unchanged. Only viable for tiny fixtures, which
    /// is exactly what it is for.
    fn brute_force_forest_weight(g: &GraphModel) -> Weight {
        let m = g.number_of_edges();
        let n = g.number_of_nodes();
        let components = g.count_components();
        assert!(m <= 16);

        let mut best = Weight::INFINITY;
        for mask in 0u32..(1 << m) {
            let mut uf = UnionFind::new(n);
            let mut weight = 0.0;
            let mut acyclic = true;
            for id in 0..m {
                if mask & (1 << id) != 0 {
                    let e = g.edge(id);
                    if !uf.union(e.source, e.target) {
                        acyclic = false;
                        break;
                    }
                    weight += e.weight;
                }
            }
            if acyclic && uf.num_sets() == components {
                best = best.min(weight);
            }
        }
        best
    }

    #[test]
    fn fixture_agrees_with_brute_force() {
        let g = model("A B 1\nB C 2\nA C 2\nC D 5");
        let oracle = brute_force_forest_weight(&g);
        assert_eq!(oracle, 8.0);

        let prim = g.prim_forest();
        let kruskal = g.kruskal_forest();
        assert_eq!(prim.total_weight, oracle);
        assert_eq!(kruskal.total_weight, oracle);
        assert_eq!(prim.edges.len(), 3);
        assert_eq!(kruskal.edges.len(), 3);
        assert!(!prim.disconnected && !kruskal.disconnected);
    }

    #[test]
    fn kruskal_breaks_ties_by_input_order() {
        let forest = model("A B 1\nB C 2\nA C 2\nC D 5").kruskal_forest();
        let picked = forest
            .edges
            .iter()
            .map(|e| format!("{}-{}", e.from, e.to))
            .collect_vec();
        assert_eq!(picked, ["A-B", "B-C", "C-D"]);
    }

    #[test]
    fn disconnected_graphs_yield_forests() {
        let g = model("A B 1\nC D 2\nD E 3\nC E 10");
        let prim = g.prim_forest();
        let kruskal = g.kruskal_forest();

        assert!(prim.disconnected);
        assert!(kruskal.disconnected);
        assert_eq!(prim.total_weight, 6.0);
        assert_eq!(kruskal.total_weight, 6.0);
        // V - C edges: 5 nodes, 2 components
        assert_eq!(prim.edges.len(), 3);
        assert_eq!(kruskal.edges.len(), 3);
    }

    #[test]
    fn negative_weights_are_allowed() {
        let g = model("A B -2\nB C -3\nA C 1");
        let prim = g.prim_forest();
        assert_eq!(prim.total_weight, -5.0);
        assert_eq!(prim.total_weight, g.kruskal_forest().total_weight);
    }

    #[test]
    fn self_loops_and_parallel_edges_are_handled() {
        let g = model("A A 1\nA B 5\nA B 2\nB C 1");
        let forest = g.kruskal_forest();
        assert_eq!(forest.total_weight, 3.0);
        assert_eq!(forest.edges.len(), 2);
        assert_eq!(g.prim_forest().total_weight, 3.0);
    }

    #[test]
    fn empty_graph() {
        let forest = model("").prim_forest();
        assert_eq!(forest.total_weight, 0.0);
        assert!(forest.edges.is_empty());
        assert!(!forest.disconnected);
    }

    #[test]
    fn prim_equals_kruskal_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..50 {
            let n = rng.random_range(2..10u32);
            let m = rng.random_range(1..14usize);
            let text = (0..m)
                .map(|_| {
                    format!(
                        "v{} v{} {}",
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(-5..10)
                    )
                })
                .join("\n");

            let g = model(&text);
            let prim = g.prim_forest();
            let kruskal = g.kruskal_forest();

            assert_eq!(prim.total_weight, kruskal.total_weight, "graph: {text}");
            assert_eq!(prim.edges.len(), kruskal.edges.len());
            assert_eq!(
                prim.edges.len(),
                g.len() - g.count_components(),
                "graph: {text}"
            );
            assert_eq!(prim.disconnected, g.count_components() > 1);
        }
    }
}
