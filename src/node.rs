/*!
# Node Representation

Externally, nodes are opaque string labels. Internally we number the
sorted unique labels `0..n` and work with `Node = u32`, which saves
space compared to `usize`/`u64` and allows algorithms to index arrays
directly. The label table lives in
[`GraphModel`](crate::model::GraphModel) and is fixed for the lifetime
of one snapshot.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Dense set over nodes, used for visited-tracking during searches
pub type NodeSet = FixedBitSet;

/// Creates an empty [`NodeSet`] able to hold `n` nodes
pub fn node_set(n: NumNodes) -> NodeSet {
    FixedBitSet::with_capacity(n as usize)
}
