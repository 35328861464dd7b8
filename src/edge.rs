use std::fmt::{Debug, Display};

use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Edge weights are real numbers. The parser guarantees finiteness,
/// so `f64::total_cmp` yields a total order downstream.
pub type Weight = f64;

/// Weight assigned to an edge whose input line carries no third token
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Edges are identified by their position in the input edge list.
pub type EdgeId = u32;

/// Edge-Id that is considered invalid
pub const INVALID_EDGE: EdgeId = EdgeId::MAX;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Dense set over edge ids, used to mark consumed edges
pub type EdgeSet = FixedBitSet;

/// Creates an empty [`EdgeSet`] able to hold `m` edges
pub fn edge_set(m: NumEdges) -> EdgeSet {
    FixedBitSet::with_capacity(m as usize)
}

/// A single parsed edge as it appears on the wire: two labels and a
/// weight. The position of a record in its list is significant — later
/// tie-breaks refer to it as "input order".
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new<S: Into<String>>(from: S, to: S, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Shorthand for a record with the default weight
    pub fn unweighted<S: Into<String>>(from: S, to: S) -> Self {
        Self::new(from, to, DEFAULT_WEIGHT)
    }
}

impl Display for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.from, self.to, self.weight)
    }
}

impl Debug for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// The indexed form of an edge inside a snapshot: endpoints resolved
/// against the sorted label table. Whether the edge is directed is up
/// to the consuming algorithm (max-flow treats it as an arc, everything
/// else as an undirected connection).
#[derive(Copy, Clone, PartialEq)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
    pub weight: Weight,
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.source, self.target, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// One traversable endpoint of an edge as seen from a node: the node
/// on the far side, the edge weight, and the id of the underlying
/// edge. A self-loop contributes two arcs to its endpoint, so arc
/// counts double as degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arc {
    pub target: Node,
    pub weight: Weight,
    pub id: EdgeId,
}
