/*!
Breadth- and depth-first traversal.

Both searches visit exactly the component reachable from their start
node; nodes outside it are simply absent from the result. Neighbor
exploration follows the adjacency index, i.e. edge-input order, so
every run over the same input is identical. The depth-first search
keeps an explicit stack — behavior stays defined even on degenerate
inputs (a ten-thousand-node path) where native recursion would not.
*/

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use super::*;

/// A breadth-first traversal iterator over the undirected
/// interpretation, yielding nodes in visitation order. Parent
/// pointers of visited nodes are available on the fly, which the
/// bipartite check and the component iterator rely on.
pub struct Bfs<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: NodeSet,
    queue: VecDeque<Node>,
    parent: Vec<Node>,
}

impl<'a, G: AdjacencyList> Bfs<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = node_set(graph.number_of_nodes());
        visited.insert(start as usize);

        let mut parent = vec![INVALID_NODE; graph.len()];
        parent[start as usize] = start;

        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
            parent,
        }
    }

    /// Checks if a given node has already been discovered
    pub fn did_visit(&self, u: Node) -> bool {
        self.visited.contains(u as usize)
    }

    /// Returns the parent of `u` in the traversal tree, or `None` for
    /// roots and undiscovered nodes
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        let p = self.parent[u as usize];
        (p != INVALID_NODE && p != u).then_some(p)
    }

    /// Tries to restart the exhausted search at the first (in sorted
    /// order) yet-unvisited node and returns true iff successful.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.did_visit(u)) {
            None => false,
            Some(u) => {
                self.visited.insert(u as usize);
                self.parent[u as usize] = u;
                self.queue.push_back(u);
                true
            }
        }
    }
}

impl<G: AdjacencyList> Iterator for Bfs<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for arc in self.graph.arcs_of(u) {
            if !self.visited.put(arc.target as usize) {
                self.parent[arc.target as usize] = u;
                self.queue.push_back(arc.target);
            }
        }

        Some(u)
    }
}

/// A depth-first traversal iterator with an explicit stack. A node's
/// arcs are pushed in reverse so the first arc in input order is
/// explored first; visitation is decided at pop time, which makes the
/// yielded sequence a proper depth-first preorder.
pub struct Dfs<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: NodeSet,
    stack: Vec<(Node, Node)>,
    parent: Vec<Node>,
}

impl<'a, G: AdjacencyList> Dfs<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self {
            graph,
            visited: node_set(graph.number_of_nodes()),
            stack: vec![(start, start)],
            parent: vec![INVALID_NODE; graph.len()],
        }
    }

    /// Returns the parent of `u` in the traversal tree, or `None` for
    /// the root and undiscovered nodes
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        let p = self.parent[u as usize];
        (p != INVALID_NODE && p != u).then_some(p)
    }
}

impl<G: AdjacencyList> Iterator for Dfs<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((p, u)) = self.stack.pop() {
            if self.visited.put(u as usize) {
                continue;
            }
            self.parent[u as usize] = p;

            for arc in self.graph.arcs_of(u).iter().rev() {
                if !self.visited.contains(arc.target as usize) {
                    self.stack.push((u, arc.target));
                }
            }

            return Some(u);
        }

        None
    }
}

/// Visitation order plus the parent pointers of the traversal tree,
/// rendered back to labels. The root carries no parent entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult {
    pub order: Vec<String>,
    pub parents: BTreeMap<String, String>,
}

/// Provides breadth- and depth-first traversal as methods on the graph
pub trait Traversal: AdjacencyList + Labels {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in breadth-first order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B\nA C\nB D").unwrap());
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, [0, 1, 2, 3]); // A, B, C, D
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in depth-first order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B\nA C\nB D").unwrap());
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, [0, 1, 3, 2]); // A, B, D, C
    /// ```
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Runs a breadth-first traversal from the given start label.
    /// Fails with [`Error::NodeNotFound`] if the label is absent.
    fn traverse_bfs(&self, start: &str) -> Result<TraversalResult> {
        let start = self.require_node(start)?;
        let mut bfs = self.bfs(start);
        let order: Vec<Node> = bfs.by_ref().collect();
        Ok(self.render(&order, |u| bfs.parent_of(u)))
    }

    /// Runs a depth-first traversal from the given start label.
    /// Fails with [`Error::NodeNotFound`] if the label is absent.
    fn traverse_dfs(&self, start: &str) -> Result<TraversalResult> {
        let start = self.require_node(start)?;
        let mut dfs = self.dfs(start);
        let order: Vec<Node> = dfs.by_ref().collect();
        Ok(self.render(&order, |u| dfs.parent_of(u)))
    }

    #[doc(hidden)]
    fn render(&self, order: &[Node], parent_of: impl Fn(Node) -> Option<Node>) -> TraversalResult {
        let parents = order
            .iter()
            .filter_map(|&u| {
                parent_of(u).map(|p| (self.label_of(u).to_string(), self.label_of(p).to_string()))
            })
            .collect();

        TraversalResult {
            order: order.iter().map(|&u| self.label_of(u).to_string()).collect(),
            parents,
        }
    }
}

impl<G: AdjacencyList + Labels> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::parse_edge_list, model::GraphModel};
    use itertools::Itertools;

    fn model(text: &str) -> GraphModel {
        GraphModel::from_records(&parse_edge_list(text).unwrap())
    }

    #[test]
    fn bfs_layers_before_depth() {
        let g = model("A B\nA C\nB D\nC D\nD E");
        let result = g.traverse_bfs("A").unwrap();
        assert_eq!(result.order, ["A", "B", "C", "D", "E"]);
        assert_eq!(result.parents["B"], "A");
        assert_eq!(result.parents["C"], "A");
        assert_eq!(result.parents["D"], "B");
        assert_eq!(result.parents["E"], "D");
        assert!(!result.parents.contains_key("A"));
    }

    #[test]
    fn dfs_follows_first_neighbor_first() {
        let g = model("A B\nA C\nB D\nC D\nD E");
        let result = g.traverse_dfs("A").unwrap();
        assert_eq!(result.order, ["A", "B", "D", "C", "E"]);
        assert_eq!(result.parents["E"], "D");
        assert_eq!(result.parents["C"], "D");
    }

    #[test]
    fn unknown_start_is_an_error() {
        let g = model("A B");
        assert_eq!(
            g.traverse_bfs("Q"),
            Err(Error::NodeNotFound {
                label: "Q".to_string()
            })
        );
        assert!(g.traverse_dfs("Q").is_err());
    }

    #[test]
    fn only_the_reachable_component_is_visited() {
        let g = model("A B\nC D");
        let result = g.traverse_bfs("A").unwrap();
        assert_eq!(result.order, ["A", "B"]);

        let result = g.traverse_dfs("C").unwrap();
        assert_eq!(result.order, ["C", "D"]);
    }

    #[test]
    fn bfs_and_dfs_agree_on_the_visited_set() {
        let g = model("A B\nB C\nC A\nC D\nE F\nF E\nG G");
        for start in ["A", "B", "C", "D", "E", "G"] {
            let bfs = g.traverse_bfs(start).unwrap();
            let dfs = g.traverse_dfs(start).unwrap();
            assert_eq!(
                bfs.order.iter().sorted().collect_vec(),
                dfs.order.iter().sorted().collect_vec()
            );
        }
    }

    #[test]
    fn self_loops_and_parallel_edges_visit_once() {
        let g = model("A A\nA B\nA B");
        let result = g.traverse_bfs("A").unwrap();
        assert_eq!(result.order, ["A", "B"]);
        let result = g.traverse_dfs("A").unwrap();
        assert_eq!(result.order, ["A", "B"]);
    }

    #[test]
    fn long_path_does_not_overflow() {
        // a path of 50k nodes would blow the stack under native recursion
        let text = (0..50_000)
            .map(|i| format!("n{i:05} n{:05}", i + 1))
            .join("\n");
        let g = model(&text);
        let result = g.traverse_dfs("n00000").unwrap();
        assert_eq!(result.order.len(), 50_001);
    }
}
