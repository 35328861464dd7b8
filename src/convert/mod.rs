/*!
# Representation Converters

Pure transforms from a snapshot into the three shapes the caller
serves: an adjacency list, an adjacency matrix, and the node/edge
element set a visualization frontend consumes. None of them mutate the
model, and all inherit its determinism: rows and node elements follow
sorted label order, neighbor lists and edge elements follow edge-input
order.

The adjacency matrix must resolve parallel edges to a single cell;
that resolution is an explicit, configurable policy on
[`MatrixBuilder`] rather than a hidden default. `MinWeight` is the
default, consistent with shortest-path semantics.
*/

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{edge::*, ops::*};

/// Per-direction neighbor entry of the adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: String,
    pub weight: Weight,
}

/// Mapping node label → neighbors, one entry per incident edge
/// endpoint in edge-input order (a self-loop appears twice). Every
/// node of the graph has a row, even if a representation-specific
/// consumer only reads some of them.
pub type AdjacencyListRepr = BTreeMap<String, Vec<Neighbor>>;

/// How the matrix conversion resolves several parallel edges (or
/// self-loops) meeting in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelEdgePolicy {
    /// Keep the smallest weight, consistent with shortest-path semantics
    #[default]
    MinWeight,
    /// Keep the weight of the edge latest in input order
    LastWins,
    /// Sum all weights, as in a multigraph collapsed to capacities
    Sum,
}

/// N×N matrix indexed by the sorted label sequence. `None` is the
/// explicit "no edge" marker — it can never be confused with a real
/// zero-weight edge. The diagonal is `None` unless a self-loop exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<Option<Weight>>>,
}

/// Configurable adjacency-matrix conversion
///
/// # Examples
/// ```
/// use wgraphs::{convert::*, prelude::*};
///
/// let g = GraphModel::from_records(&parse_edge_list("A B 3\nA B 1").unwrap());
///
/// let by_min = MatrixBuilder::new().build(&g);
/// assert_eq!(by_min.matrix[0][1], Some(1.0));
///
/// let by_sum = MatrixBuilder::new()
///     .parallel_edge_policy(ParallelEdgePolicy::Sum)
///     .build(&g);
/// assert_eq!(by_sum.matrix[0][1], Some(4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    policy: ParallelEdgePolicy,
}

impl MatrixBuilder {
    /// Creates a new (default) builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the parallel-edge resolution policy
    pub fn parallel_edge_policy(mut self, policy: ParallelEdgePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the symmetric matrix of the undirected interpretation
    pub fn build<G: GraphNodeOrder + GraphEdges + Labels>(&self, graph: &G) -> AdjacencyMatrix {
        let n = graph.len();
        let mut matrix = vec![vec![None; n]; n];

        for e in graph.edge_slice() {
            let (i, j) = (e.source as usize, e.target as usize);
            matrix[i][j] = Some(self.resolve(matrix[i][j], e.weight));
            if i != j {
                matrix[j][i] = Some(self.resolve(matrix[j][i], e.weight));
            }
        }

        AdjacencyMatrix {
            labels: graph.label_slice().to_vec(),
            matrix,
        }
    }

    fn resolve(&self, cell: Option<Weight>, weight: Weight) -> Weight {
        match (cell, self.policy) {
            (None, _) => weight,
            (Some(old), ParallelEdgePolicy::MinWeight) => old.min(weight),
            (Some(_), ParallelEdgePolicy::LastWins) => weight,
            (Some(old), ParallelEdgePolicy::Sum) => old + weight,
        }
    }
}

/// One node element for the visualization frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizNode {
    pub id: String,
}

/// One edge element for the visualization frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizEdge {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

/// The element set a graph-drawing frontend consumes: all nodes in
/// sorted order, then all edges in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizElements {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
}

/// The three representations a snapshot converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    AdjacencyList,
    AdjacencyMatrix,
    Visualization,
}

/// Result of a [`Representation`]-dispatched conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RepresentationOutput {
    AdjacencyList(AdjacencyListRepr),
    AdjacencyMatrix(AdjacencyMatrix),
    Visualization(VizElements),
}

/// Provides the conversions as methods on the graph
pub trait Representations: AdjacencyList + GraphNodeOrder + GraphEdges + Labels {
    /// Renders the adjacency list, one row per node in sorted order
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{convert::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B 2").unwrap());
    /// let adj = g.to_adjacency_list();
    ///
    /// assert_eq!(adj["B"][0].node, "A");
    /// assert_eq!(adj["B"][0].weight, 2.0);
    /// ```
    fn to_adjacency_list(&self) -> AdjacencyListRepr {
        self.vertices()
            .map(|u| {
                let row = self
                    .arcs_of(u)
                    .iter()
                    .map(|a| Neighbor {
                        node: self.label_of(a.target).to_string(),
                        weight: a.weight,
                    })
                    .collect();
                (self.label_of(u).to_string(), row)
            })
            .collect()
    }

    /// Renders the adjacency matrix under the default policy; use
    /// [`MatrixBuilder`] to pick another one
    fn to_adjacency_matrix(&self) -> AdjacencyMatrix {
        MatrixBuilder::new().build(self)
    }

    /// Renders the visualization element set
    fn to_viz_elements(&self) -> VizElements {
        VizElements {
            nodes: self
                .label_slice()
                .iter()
                .map(|l| VizNode { id: l.clone() })
                .collect(),
            edges: self
                .edge_slice()
                .iter()
                .map(|e| VizEdge {
                    source: self.label_of(e.source).to_string(),
                    target: self.label_of(e.target).to_string(),
                    weight: e.weight,
                })
                .collect(),
        }
    }

    /// Dispatches over the requested representation
    fn represent(&self, target: Representation) -> RepresentationOutput {
        match target {
            Representation::AdjacencyList => {
                RepresentationOutput::AdjacencyList(self.to_adjacency_list())
            }
            Representation::AdjacencyMatrix => {
                RepresentationOutput::AdjacencyMatrix(self.to_adjacency_matrix())
            }
            Representation::Visualization => {
                RepresentationOutput::Visualization(self.to_viz_elements())
            }
        }
    }
}

impl<G: AdjacencyList + GraphNodeOrder + GraphEdges + Labels> Representations for G {}
