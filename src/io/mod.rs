/*!
# IO

The edge-list text format is the system's only wire format: one edge
per non-empty line, whitespace-tokenized as `<from> <to> [weight]`.
[`EdgeListParser`] reads it, [`EdgeListWriter`] renders it back, and a
write-then-parse round trip always yields an equivalent edge multiset.

For default settings, use the [`parse_edge_list`] / [`write_edge_list`]
shorthands.
*/

mod edge_list;

pub use edge_list::*;
