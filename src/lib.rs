/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : every edge carries a real-valued weight (defaulting to `1`)
- **w**ire-parsed : graphs arrive as line-oriented edge-list text, one `<from> <to> [weight]` per line
- **w**ild : parallel edges and self-loops are kept exactly as given, never deduplicated

# Representation

Externally nodes are opaque string labels; internally the sorted unique
labels are numbered `0..n` and algorithms work on `u32` indices into
that table. Every invocation builds a fresh immutable
[`GraphModel`](model::GraphModel) snapshot from its input records, runs
one algorithm or conversion against it, and discards it — there is no
hidden shared state anywhere in the crate.

### Directed vs Undirected

Each edge is stored once, as given. Which interpretation applies is
part of every algorithm's contract:

- **undirected** for traversal, shortest paths, spanning forests,
  bipartiteness, and Eulerian trails: an edge contributes to the
  adjacency and degree of both endpoints (a self-loop counts twice),
- **directed** for maximum flow only: an edge is one arc from its
  `from` to its `to` endpoint, with the weight read as a capacity.

# Design

Algorithms are provided as traits blanket-implemented over the ops
traits ([`ops::AdjacencyList`], [`ops::GraphEdges`], [`ops::Labels`]),
making them usable as plain methods on the snapshot
(`model.bfs(start)`, `model.kruskal_forest()`). Configurable pieces
(the edge-list parser, the adjacency-matrix conversion) follow the
*Builder* / *Setter* pattern before being run.

Determinism is a design goal throughout: node iteration follows sorted
label order, neighbor iteration follows edge-input order, and every
priority tie-break is pinned, so identical input always produces an
identical result.

All searches use explicit frontiers (queues, stacks, heaps) rather
than native recursion, so behavior stays defined on degenerate inputs
like very long paths.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] re-exports nodes, edges, errors, the snapshot type, the
  ops traits, parsing, and the engine entry points,
- [`algo`] contains the algorithm catalogue as traits on the snapshot:
  traversal, Dijkstra, Prim/Kruskal, Edmonds-Karp, bipartiteness,
  bridges, connectivity, and Eulerian trails,
- [`convert`] renders adjacency-list, adjacency-matrix, and
  visualization-element representations,
- [`io`] parses and writes the edge-list wire format,
- [`engine`] dispatches a request (`AlgorithmKind` + records + optional
  endpoints) to the right algorithm, for callers that route by name.

```
use wgraphs::{algo::*, prelude::*};

let records = parse_edge_list("A B 1\nB C 2\nA C 4").unwrap();
let model = GraphModel::from_records(&records);

let result = model.shortest_path("A", Some("C")).unwrap();
assert_eq!(result.distances["C"], Some(3.0));
```

Every fallible operation returns a typed
[`Error`](error::Error) — malformed input, unknown labels, negative
weights where forbidden, unmet Eulerian preconditions, or caller
contract violations. Nothing in the crate logs or panics on bad input;
rendering errors for humans is the caller's concern.
*/

pub mod algo;
pub mod convert;
pub mod edge;
pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod node;
pub mod ops;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, the
/// snapshot type, all ops traits, and the parse/run/convert entry points.
pub mod prelude {
    pub use super::{
        edge::*,
        engine::{convert, run, AlgorithmKind, AlgorithmResult},
        error::*,
        io::{parse_edge_list, write_edge_list},
        model::GraphModel,
        node::*,
        ops::*,
    };
}
