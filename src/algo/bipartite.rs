/*!
# Bipartiteness

Proposes a 2-coloring via breadth-first parity over every connected
component, then validates it against every edge. If the proposal
survives validation the graph is bipartite and the two sides are
returned; if not, no valid 2-coloring exists at all.

A self-loop makes any graph non-bipartite (a node cannot differ in
color from itself) and short-circuits the sweep.
*/

use serde::Serialize;

use super::{traversal::Bfs, *};

/// The two sides of a valid 2-coloring, as sorted label lists. Each
/// component's smallest node sits on the left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bipartition {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

/// Outcome of the bipartite check. The boolean is authoritative;
/// `partitions` is populated exactly when the graph is bipartite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BipartiteResult {
    pub bipartite: bool,
    pub partitions: Option<Bipartition>,
}

/// Tests for and computes bipartitions
pub trait BipartiteTest: AdjacencyList + GraphEdges + Labels {
    /// Computes a valid bipartition of the graph, if one exists. The
    /// returned set holds the nodes on the right side.
    fn compute_bipartition(&self) -> Option<NodeSet> {
        // a self-loop can never be properly colored
        if self.edge_slice().iter().any(|e| e.is_loop()) {
            return None;
        }

        let side = propose_bipartition_by_parity(self);

        self.edge_slice()
            .iter()
            .all(|e| side.contains(e.source as usize) != side.contains(e.target as usize))
            .then_some(side)
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let square = GraphModel::from_records(&parse_edge_list("A B\nB C\nC D\nD A").unwrap());
    /// assert!(square.is_bipartite());
    ///
    /// let triangle = GraphModel::from_records(&parse_edge_list("A B\nB C\nC A").unwrap());
    /// assert!(!triangle.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }

    /// Runs the full check and renders the sides back to labels
    fn bipartite_check(&self) -> BipartiteResult {
        match self.compute_bipartition() {
            None => BipartiteResult {
                bipartite: false,
                partitions: None,
            },
            Some(side) => {
                let (right, left): (Vec<Node>, Vec<Node>) =
                    self.vertices().partition(|&u| side.contains(u as usize));
                let labels = |nodes: Vec<Node>| {
                    nodes
                        .into_iter()
                        .map(|u| self.label_of(u).to_string())
                        .collect()
                };

                BipartiteResult {
                    bipartite: true,
                    partitions: Some(Bipartition {
                        left: labels(left),
                        right: labels(right),
                    }),
                }
            }
        }
    }
}

impl<G: AdjacencyList + GraphEdges + Labels> BipartiteTest for G {}

/// Colors every component by breadth-first parity: roots go left,
/// each discovered node gets the side opposite its parent. For a
/// bipartite graph the result is a valid bipartition; otherwise some
/// edge will connect equal sides and validation rejects it.
fn propose_bipartition_by_parity<G: AdjacencyList>(graph: &G) -> NodeSet {
    let mut side = node_set(graph.number_of_nodes());
    if graph.is_empty() {
        return side;
    }

    let mut bfs = Bfs::new(graph, 0);
    loop {
        for u in bfs.by_ref().collect::<Vec<_>>() {
            if let Some(p) = bfs.parent_of(u) {
                if !side.contains(p as usize) {
                    side.insert(u as usize);
                }
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    side
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::parse_edge_list, model::GraphModel};

    fn model(text: &str) -> GraphModel {
        GraphModel::from_records(&parse_edge_list(text).unwrap())
    }

    #[test]
    fn even_cycle_is_bipartite() {
        let result = model("A B\nB C\nC D\nD A").bipartite_check();
        assert!(result.bipartite);
        let sides = result.partitions.unwrap();
        assert_eq!(sides.left, ["A", "C"]);
        assert_eq!(sides.right, ["B", "D"]);
    }

    #[test]
    fn odd_cycle_is_not() {
        let result = model("A B 1\nB C 1\nC A 1").bipartite_check();
        assert!(!result.bipartite);
        assert!(result.partitions.is_none());
    }

    #[test]
    fn longer_odd_cycle_is_not() {
        assert!(!model("A B\nB C\nC D\nD E\nE A").is_bipartite());
    }

    #[test]
    fn self_loop_always_fails() {
        assert!(!model("A A").is_bipartite());
        assert!(!model("A B\nB C\nC C").is_bipartite());
    }

    #[test]
    fn components_are_checked_independently() {
        assert!(model("A B\nC D\nD E").is_bipartite());
        // one component bipartite, the other not
        assert!(!model("A B\nX Y\nY Z\nZ X").is_bipartite());
    }

    #[test]
    fn parallel_edges_do_not_matter() {
        assert!(model("A B\nA B\nA B").is_bipartite());
    }

    #[test]
    fn empty_graph_is_vacuously_bipartite() {
        let result = model("").bipartite_check();
        assert!(result.bipartite);
        let sides = result.partitions.unwrap();
        assert!(sides.left.is_empty() && sides.right.is_empty());
    }

    #[test]
    fn proposed_coloring_is_valid_when_bipartite() {
        let g = model("A B\nB C\nA D\nD E\nE F\nF A");
        let side = g.compute_bipartition().unwrap();
        for e in g.edge_slice() {
            assert_ne!(
                side.contains(e.source as usize),
                side.contains(e.target as usize)
            );
        }
    }
}
