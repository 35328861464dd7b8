use super::*;

/// Finds all bridges of the undirected interpretation
pub trait Bridges: AdjacencyList + GraphEdgeOrder {
    /// Returns the set of bridge edges — edges whose removal would
    /// disconnect their component. Parallel edges and self-loops are
    /// never bridges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B\nB C\nC A\nC D").unwrap());
    /// let bridges = g.bridge_edges();
    ///
    /// assert_eq!(bridges.ones().collect::<Vec<_>>(), [3]); // only C-D
    /// ```
    fn bridge_edges(&self) -> EdgeSet {
        bridges_of_remaining(self, &edge_set(self.number_of_edges()))
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> Bridges for G {}

/// One lowlink traversal frame: the node, the edge we entered it
/// through, and a cursor into its arc list.
struct Frame {
    node: Node,
    in_edge: EdgeId,
    next: usize,
}

/// Computes the bridges of the graph restricted to edges not in
/// `removed`. Iterative lowlink search keyed by edge id: entering a
/// node records the discovery time, back-edges lower the lowlink, and
/// on frame completion an edge is a bridge iff the subtree below it
/// cannot reach at or above its tail. Skipping the entry *edge id*
/// (rather than the parent node) is what keeps parallel edges from
/// being reported.
pub(crate) fn bridges_of_remaining<G: AdjacencyList>(graph: &G, removed: &EdgeSet) -> EdgeSet {
    let n = graph.len();
    let mut discovery = vec![0u32; n];
    let mut low = vec![0u32; n];
    let mut time = 0u32;
    let mut bridges = EdgeSet::with_capacity(removed.len());
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.vertices() {
        if discovery[root as usize] != 0 {
            continue;
        }

        time += 1;
        discovery[root as usize] = time;
        low[root as usize] = time;
        stack.push(Frame {
            node: root,
            in_edge: INVALID_EDGE,
            next: 0,
        });

        while let Some(top) = stack.len().checked_sub(1) {
            let u = stack[top].node;
            let next = stack[top].next;
            let arcs = graph.arcs_of(u);

            if next < arcs.len() {
                stack[top].next += 1;
                let arc = arcs[next];

                if removed.contains(arc.id as usize)
                    || arc.id == stack[top].in_edge
                    || arc.target == u
                {
                    continue;
                }

                let v = arc.target as usize;
                if discovery[v] == 0 {
                    time += 1;
                    discovery[v] = time;
                    low[v] = time;
                    stack.push(Frame {
                        node: arc.target,
                        in_edge: arc.id,
                        next: 0,
                    });
                } else {
                    low[u as usize] = low[u as usize].min(discovery[v]);
                }
            } else {
                let completed = stack.pop().expect("frame present");
                if let Some(parent) = stack.last() {
                    let p = parent.node as usize;
                    low[p] = low[p].min(low[u as usize]);
                    if low[u as usize] > discovery[p] {
                        bridges.insert(completed.in_edge as usize);
                    }
                }
            }
        }
    }

    bridges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::parse_edge_list, model::GraphModel};
    use itertools::Itertools;

    fn model(text: &str) -> GraphModel {
        GraphModel::from_records(&parse_edge_list(text).unwrap())
    }

    fn bridge_ids(text: &str) -> Vec<usize> {
        model(text).bridge_edges().ones().sorted().collect_vec()
    }

    #[test]
    fn every_path_edge_is_a_bridge() {
        assert_eq!(bridge_ids("A B\nB C\nC D"), [0, 1, 2]);
    }

    #[test]
    fn cycles_have_no_bridges() {
        assert_eq!(bridge_ids("A B\nB C\nC A"), Vec::<usize>::new());
    }

    #[test]
    fn bridge_between_two_cycles() {
        let ids = bridge_ids("A B\nB C\nC A\nC D\nD E\nE F\nF D");
        assert_eq!(ids, [3]); // only C-D connects the two cycles
    }

    #[test]
    fn parallel_edges_are_never_bridges() {
        assert_eq!(bridge_ids("A B\nA B"), Vec::<usize>::new());
        // one parallel pair plus a genuine bridge behind it
        assert_eq!(bridge_ids("A B\nA B\nB C"), [2]);
    }

    #[test]
    fn self_loops_are_never_bridges() {
        assert_eq!(bridge_ids("A A\nA B"), [1]);
    }

    #[test]
    fn removed_edges_change_the_picture() {
        let g = model("A B\nB C\nC A");
        // dropping one cycle edge turns the other two into bridges
        let mut removed = edge_set(g.number_of_edges());
        removed.insert(0);
        let bridges = bridges_of_remaining(&g, &removed);
        assert_eq!(bridges.ones().sorted().collect_vec(), [1, 2]);
    }

    #[test]
    fn disconnected_components_are_searched_independently() {
        assert_eq!(bridge_ids("A B\nC D\nD E\nE C"), [0]);
    }
}
