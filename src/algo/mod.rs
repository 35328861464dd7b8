/*!
# Graph Algorithms

The fixed catalogue of algorithms the engine exposes, each in its own
module and each blanket-implemented as a trait over the ops traits, so
they read as methods on the snapshot itself:

```rust
use wgraphs::{algo::*, prelude::*};

let model = GraphModel::from_records(&parse_edge_list("A B\nB C").unwrap());
assert!(model.is_bipartite());
```

Every algorithm is a pure function of one immutable snapshot: it
allocates its own working state (visited sets, heaps, residual
capacities), runs to completion, and returns a self-contained result
or a typed error. Nothing is shared between invocations.

Which edge interpretation an algorithm uses is part of its contract:
max-flow reads each edge as a directed arc with the weight as capacity;
traversal, shortest path, spanning forests, bipartiteness, and Eulerian
trails all use the undirected interpretation.
*/

mod bipartite;
mod bridges;
mod connectivity;
mod eulerian;
mod max_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{edge::*, error::*, node::*, ops::*};

pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use max_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
