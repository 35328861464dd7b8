/*!
# Single-Source Shortest Paths

Dijkstra's algorithm over the undirected interpretation. Correctness
requires non-negative weights, so the whole edge list is checked up
front and a negative weight fails with
[`Error::InvalidWeight`](crate::error::Error) instead of silently
mis-answering.

Unreachable nodes carry an explicit `None` distance — never a numeric
stand-in that could be mistaken for a real distance.
*/

use std::{
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap},
};

use serde::Serialize;

use super::*;

/// Heap key ordered by distance first, node index second. The node
/// tie-break makes the relaxation order — and with it every reported
/// path — deterministic across runs.
#[derive(Copy, Clone, PartialEq)]
struct HeapEntry {
    dist: Weight,
    node: Node,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then(self.node.cmp(&other.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and parent pointers from one Dijkstra run, index-level.
pub struct DijkstraTree {
    start: Node,
    dist: Vec<Option<Weight>>,
    parent: Vec<Node>,
}

impl DijkstraTree {
    /// Returns the distance of `u` from the start node, or `None` if
    /// `u` is unreachable
    pub fn distance(&self, u: Node) -> Option<Weight> {
        self.dist[u as usize]
    }

    /// Returns the shortest path from the start node to `target` as a
    /// node sequence (both endpoints included), or `None` if `target`
    /// is unreachable
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        self.dist[target as usize]?;

        let mut path = vec![target];
        let mut u = target;
        while u != self.start {
            u = self.parent[u as usize];
            path.push(u);
        }

        path.reverse();
        Some(path)
    }
}

/// `null` for unreachable, the distance otherwise — rendered per node label
pub type DistanceMap = BTreeMap<String, Option<Weight>>;

/// The concrete path to a requested target, or the explicit statement
/// that none exists
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathOutcome {
    Found(Vec<String>),
    NoPath,
}

/// Distances from the start to every node, plus the reconstructed
/// path when a target was requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult {
    pub distances: DistanceMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathOutcome>,
}

/// Provides weighted shortest-path searches as methods on the graph
pub trait ShortestPath: AdjacencyList + GraphEdges + Labels {
    /// Runs Dijkstra from `start`, relaxing along a priority queue.
    /// Fails with [`Error::InvalidWeight`] if any edge weight is
    /// negative.
    fn dijkstra(&self, start: Node) -> Result<DijkstraTree> {
        if let Some(weight) = self.first_negative_weight() {
            return Err(Error::InvalidWeight { weight });
        }

        let mut dist: Vec<Option<Weight>> = vec![None; self.len()];
        let mut parent = vec![INVALID_NODE; self.len()];
        let mut heap = BinaryHeap::new();

        dist[start as usize] = Some(0.0);
        parent[start as usize] = start;
        heap.push(Reverse(HeapEntry {
            dist: 0.0,
            node: start,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            // settled earlier with a smaller distance
            if dist[entry.node as usize].is_some_and(|d| entry.dist > d) {
                continue;
            }

            for arc in self.arcs_of(entry.node) {
                let candidate = entry.dist + arc.weight;
                if dist[arc.target as usize].is_none_or(|d| candidate < d) {
                    dist[arc.target as usize] = Some(candidate);
                    parent[arc.target as usize] = entry.node;
                    heap.push(Reverse(HeapEntry {
                        dist: candidate,
                        node: arc.target,
                    }));
                }
            }
        }

        Ok(DijkstraTree {
            start,
            dist,
            parent,
        })
    }

    /// Computes shortest distances from `start` to every node, and the
    /// concrete path to `target` when one is given.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B 1\nB C 2\nA C 4").unwrap());
    /// let result = g.shortest_path("A", Some("C")).unwrap();
    ///
    /// assert_eq!(result.distances["C"], Some(3.0));
    /// assert_eq!(
    ///     result.path,
    ///     Some(PathOutcome::Found(vec!["A".into(), "B".into(), "C".into()]))
    /// );
    /// ```
    fn shortest_path(&self, start: &str, target: Option<&str>) -> Result<ShortestPathResult> {
        let s = self.require_node(start)?;
        let t = target.map(|t| self.require_node(t)).transpose()?;

        let tree = self.dijkstra(s)?;

        let distances = self
            .vertices()
            .map(|u| (self.label_of(u).to_string(), tree.distance(u)))
            .collect();

        let path = t.map(|t| match tree.path_to(t) {
            Some(path) => PathOutcome::Found(
                path.into_iter()
                    .map(|u| self.label_of(u).to_string())
                    .collect(),
            ),
            None => PathOutcome::NoPath,
        });

        Ok(ShortestPathResult { distances, path })
    }
}

impl<G: AdjacencyList + GraphEdges + Labels> ShortestPath for G {}
