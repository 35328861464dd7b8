use std::ops::Range;

use crate::{
    edge::*,
    error::{Error, Result},
    node::*,
};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in sorted label order. The range does
    /// not borrow self and may be used where additional references of
    /// self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the edge list exactly as given in the input. Kruskal's
/// tie-break and the per-edge flow report depend on this order.
pub trait GraphEdges: GraphEdgeOrder {
    /// Returns all edges in input order; an edge's position is its [`EdgeId`]
    fn edge_slice(&self) -> &[Edge];

    /// Returns the edge with the given id
    fn edge(&self, id: EdgeId) -> &Edge {
        &self.edge_slice()[id as usize]
    }

    /// Returns the first negative edge weight in input order, if any.
    /// Algorithms that require non-negativity check this up front
    /// instead of mis-answering silently.
    fn first_negative_weight(&self) -> Option<Weight> {
        self.edge_slice().iter().map(|e| e.weight).find(|w| *w < 0.0)
    }
}

/// Getters for the undirected adjacency index: per node, one arc per
/// incident edge endpoint in edge-input order. A self-loop shows up as
/// two arcs on its node, so `degree_of` counts it twice.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the arcs incident to `u` in edge-input order.
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: Node) -> &[Arc];

    /// Returns an iterator over the neighbors of `u`, one entry per
    /// incident edge endpoint.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs_of(u).iter().map(|a| a.target)
    }

    /// Returns the degree of `u` (self-loops counted twice)
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.arcs_of(u).len() as NumNodes
    }

    /// Returns an iterator over all degrees in node order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with at least one incident edge
    fn vertices_with_arcs(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }
}

/// Access to the node labels of a snapshot. Algorithms compute on
/// indices and translate back to labels only when building results.
pub trait Labels {
    /// Returns the label of node `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns all labels in sorted order; a label's position is its [`Node`] index
    fn label_slice(&self) -> &[String];

    /// Returns the node carrying the given label, if any
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Resolves a label, failing with [`Error::NodeNotFound`] if it is
    /// not an endpoint of any edge
    fn require_node(&self, label: &str) -> Result<Node> {
        self.node_of(label).ok_or_else(|| Error::NodeNotFound {
            label: label.to_string(),
        })
    }
}

/// Label-level rendering of edges, for graphs that know both their
/// edge list and their label table
pub trait EdgeRecords: GraphEdges + Labels {
    /// Renders the edge with the given id back to its record form
    fn record_of(&self, id: EdgeId) -> EdgeRecord {
        let e = *self.edge(id);
        EdgeRecord::new(self.label_of(e.source), self.label_of(e.target), e.weight)
    }
}

impl<G: GraphEdges + Labels> EdgeRecords for G {}
