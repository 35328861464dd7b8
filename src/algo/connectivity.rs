use super::{traversal::Bfs, *};

/// Iterator over the connected components of the undirected
/// interpretation, in sorted-node order: each yielded component starts
/// at the smallest node not seen so far. Driven by a restartable BFS.
pub struct ConnectedComponents<'a, G: AdjacencyList> {
    bfs: Option<Bfs<'a, G>>,
}

impl<'a, G: AdjacencyList> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| Bfs::new(graph, 0)),
        }
    }
}

impl<G: AdjacencyList> Iterator for ConnectedComponents<'_, G> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;

        loop {
            let cc: Vec<Node> = bfs.by_ref().collect();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

/// Connectivity queries on the undirected interpretation
pub trait Connectivity: AdjacencyList {
    /// Returns an iterator over all connected components
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B\nC D").unwrap());
    /// assert_eq!(g.connected_components().count(), 2);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (0 for an empty graph)
    fn count_components(&self) -> usize {
        self.connected_components().count()
    }

    /// Returns *true* if all nodes with at least one incident edge lie
    /// in a single connected component. Vacuously true without edges.
    fn non_isolated_connected(&self) -> bool {
        let Some(start) = self.vertices_with_arcs().next() else {
            return true;
        };

        let mut bfs = Bfs::new(self, start);
        bfs.by_ref().for_each(drop);
        self.vertices_with_arcs().all(|u| bfs.did_visit(u))
    }
}

impl<G: AdjacencyList> Connectivity for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::parse_edge_list, model::GraphModel};
    use itertools::Itertools;

    fn model(text: &str) -> GraphModel {
        GraphModel::from_records(&parse_edge_list(text).unwrap())
    }

    #[test]
    fn single_component() {
        let g = model("A B\nB C\nC A");
        let ccs = g.connected_components().collect_vec();
        assert_eq!(ccs, [vec![0, 1, 2]]);
        assert!(g.non_isolated_connected());
    }

    #[test]
    fn components_start_at_smallest_unseen_node() {
        let g = model("E F\nA B\nB C");
        let ccs = g.connected_components().collect_vec();
        // labels sorted: A B C E F
        assert_eq!(ccs.len(), 2);
        assert_eq!(ccs[0], [0, 1, 2]);
        assert_eq!(ccs[1], [3, 4]);
        assert!(!g.non_isolated_connected());
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = model("");
        assert_eq!(g.count_components(), 0);
        assert!(g.non_isolated_connected());
    }

    #[test]
    fn self_loop_is_its_own_component() {
        let g = model("A A\nB C");
        assert_eq!(g.count_components(), 2);
    }
}
