/*!
# GraphModel

The immutable snapshot every algorithm runs against. A model is built
fresh from a parsed edge list, consumed by exactly one algorithm or
conversion, and then discarded — nothing in this crate holds on to a
model across invocations, and nothing mutates one in place.

The node set is derived, never declared: it is the union of all edge
endpoints, deduplicated and sorted lexicographically. The sort gives
deterministic matrix indexing and a deterministic iteration order for
every downstream algorithm. The undirected adjacency index is built
lazily on first use and cached inside the snapshot.
*/

use fxhash::FxHashMap;
use once_cell::unsync::OnceCell;
use smallvec::SmallVec;

use crate::{edge::*, node::*, ops::*};

/// Per-node arc storage; interactive-scale graphs rarely exceed a few
/// incident edges per node, so small inline buffers avoid most heap
/// traffic.
pub(crate) type ArcList = SmallVec<[Arc; 4]>;

/// Immutable snapshot of a parsed edge list: sorted unique label
/// table, edges in input order, and a lazily built adjacency index.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let records = parse_edge_list("B C 2\nA B 1").unwrap();
/// let model = GraphModel::from_records(&records);
///
/// assert_eq!(model.label_slice(), ["A", "B", "C"]);
/// assert_eq!(model.number_of_nodes(), 3);
/// assert_eq!(model.number_of_edges(), 2);
/// ```
pub struct GraphModel {
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
    edges: Vec<Edge>,
    adjacency: OnceCell<Vec<ArcList>>,
}

impl GraphModel {
    /// Builds a snapshot from parsed records. Parallel edges and
    /// self-loops are kept as given; nothing is deduplicated.
    pub fn from_records(records: &[EdgeRecord]) -> Self {
        let mut labels: Vec<&str> = records
            .iter()
            .flat_map(|r| [r.from.as_str(), r.to.as_str()])
            .collect();
        labels.sort_unstable();
        labels.dedup();

        let labels: Vec<String> = labels.into_iter().map(String::from).collect();
        let index: FxHashMap<String, Node> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i as Node))
            .collect();

        let edges = records
            .iter()
            .map(|r| Edge {
                source: index[&r.from],
                target: index[&r.to],
                weight: r.weight,
            })
            .collect();

        Self {
            labels,
            index,
            edges,
            adjacency: OnceCell::new(),
        }
    }

    fn adjacency(&self) -> &[ArcList] {
        self.adjacency.get_or_init(|| {
            let mut adjacency = vec![ArcList::new(); self.labels.len()];
            for (id, e) in self.edges.iter().enumerate() {
                let id = id as EdgeId;
                adjacency[e.source as usize].push(Arc {
                    target: e.target,
                    weight: e.weight,
                    id,
                });
                // the reverse direction; a self-loop lands on the same
                // node twice and thereby counts twice towards its degree
                adjacency[e.target as usize].push(Arc {
                    target: e.source,
                    weight: e.weight,
                    id,
                });
            }
            adjacency
        })
    }
}

impl GraphNodeOrder for GraphModel {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for GraphModel {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphEdges for GraphModel {
    fn edge_slice(&self) -> &[Edge] {
        &self.edges
    }
}

impl AdjacencyList for GraphModel {
    fn arcs_of(&self, u: Node) -> &[Arc] {
        &self.adjacency()[u as usize]
    }
}

impl Labels for GraphModel {
    fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    fn label_slice(&self) -> &[String] {
        &self.labels
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn model(text: &str) -> GraphModel {
        GraphModel::from_records(&crate::io::parse_edge_list(text).unwrap())
    }

    #[test]
    fn labels_are_sorted_and_unique() {
        let m = model("C A\nB C\nA B");
        assert_eq!(m.label_slice(), ["A", "B", "C"]);
        assert_eq!(m.node_of("B"), Some(1));
        assert_eq!(m.node_of("Z"), None);
        assert!(m.require_node("Z").is_err());
    }

    #[test]
    fn adjacency_preserves_input_order() {
        let m = model("A C 3\nA B 1\nB C 2");
        let a = m.require_node("A").unwrap();

        let neighbors = m
            .arcs_of(a)
            .iter()
            .map(|arc| (m.label_of(arc.target).to_string(), arc.weight))
            .collect_vec();
        assert_eq!(
            neighbors,
            [("C".to_string(), 3.0), ("B".to_string(), 1.0)]
        );
    }

    #[test]
    fn self_loop_counts_twice() {
        let m = model("A A\nA B");
        let a = m.require_node("A").unwrap();
        let b = m.require_node("B").unwrap();

        assert_eq!(m.degree_of(a), 3);
        assert_eq!(m.degree_of(b), 1);
        assert_eq!(m.neighbors_of(a).filter(|&v| v == a).count(), 2);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let m = GraphModel::from_records(&[
            EdgeRecord::unweighted("A", "B"),
            EdgeRecord::new("A", "B", 2.0),
            EdgeRecord::new("B", "A", 3.0),
        ]);
        assert_eq!(m.number_of_edges(), 3);
        assert_eq!(m.edge(0).weight, 1.0);
        let a = m.require_node("A").unwrap();
        assert_eq!(m.degree_of(a), 3);
    }

    #[test]
    fn empty_input_yields_empty_model() {
        let m = model("");
        assert!(m.is_empty());
        assert!(m.is_edgeless());
        assert_eq!(m.vertices().count(), 0);
    }

    #[test]
    fn negative_weight_scan() {
        assert_eq!(model("A B 1\nB C 2").first_negative_weight(), None);
        assert_eq!(model("A B 1\nB C -2.5").first_negative_weight(), Some(-2.5));
    }
}
