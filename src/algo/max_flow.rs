/*!
# Maximum Flow

Edmonds-Karp: Ford-Fulkerson specialized to breadth-first augmenting
paths, which bounds the number of augmentations polynomially instead
of relying on lucky path choices.

This is the one algorithm that reads the snapshot as a **directed**
network: every edge is a single arc from its `from` endpoint to its
`to` endpoint, with the weight as capacity. The residual graph pairs
each arc with a reverse arc of capacity 0 and is owned by one
invocation, mutated freely, and discarded.
*/

use std::collections::VecDeque;

use serde::Serialize;

use super::*;

/// Flow assigned to one original edge, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeFlow {
    pub from: String,
    pub to: String,
    pub capacity: Weight,
    pub flow: Weight,
}

/// The maximum flow value and the per-edge flows realizing it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxFlowResult {
    pub max_flow: Weight,
    pub flows: Vec<EdgeFlow>,
}

/// Arc-id addressed residual capacities: original edge `i` owns the
/// forward arc `2i` and the reverse arc `2i ^ 1`. Augmenting along an
/// arc moves capacity to its partner, so the reverse arc's capacity
/// always reads as the net flow pushed through the original edge.
struct ResidualNetwork {
    capacity: Vec<Weight>,
    head: Vec<Node>,
    arcs_out: Vec<Vec<u32>>,
}

const INVALID_ARC: u32 = u32::MAX;

impl ResidualNetwork {
    fn new<G: GraphNodeOrder + GraphEdges>(graph: &G) -> Self {
        let m = graph.number_of_edges() as usize;
        let mut network = Self {
            capacity: Vec::with_capacity(2 * m),
            head: Vec::with_capacity(2 * m),
            arcs_out: vec![Vec::new(); graph.len()],
        };

        for e in graph.edge_slice() {
            let forward = network.capacity.len() as u32;
            network.arcs_out[e.source as usize].push(forward);
            network.capacity.push(e.weight);
            network.head.push(e.target);

            network.arcs_out[e.target as usize].push(forward ^ 1);
            network.capacity.push(0.0);
            network.head.push(e.source);
        }

        network
    }

    /// Breadth-first search for an augmenting path. Fills `parent_arc`
    /// with the arc each discovered node was reached through and
    /// returns whether the sink was reached.
    fn find_augmenting_path(&self, s: Node, t: Node, parent_arc: &mut [u32]) -> bool {
        parent_arc.fill(INVALID_ARC);
        let mut queue = VecDeque::from(vec![s]);

        while let Some(u) = queue.pop_front() {
            for &arc in &self.arcs_out[u as usize] {
                let v = self.head[arc as usize];
                if self.capacity[arc as usize] <= 0.0
                    || v == s
                    || parent_arc[v as usize] != INVALID_ARC
                {
                    continue;
                }

                parent_arc[v as usize] = arc;
                if v == t {
                    return true;
                }
                queue.push_back(v);
            }
        }

        false
    }

    /// Pushes the bottleneck capacity along the found path and returns it
    fn augment(&mut self, s: Node, t: Node, parent_arc: &[u32]) -> Weight {
        let mut bottleneck = Weight::INFINITY;
        let mut v = t;
        while v != s {
            let arc = parent_arc[v as usize] as usize;
            bottleneck = bottleneck.min(self.capacity[arc]);
            v = self.head[arc ^ 1];
        }

        let mut v = t;
        while v != s {
            let arc = parent_arc[v as usize] as usize;
            self.capacity[arc] -= bottleneck;
            self.capacity[arc ^ 1] += bottleneck;
            v = self.head[arc ^ 1];
        }

        bottleneck
    }

    /// Net flow pushed through original edge `id`
    fn flow_through(&self, id: EdgeId) -> Weight {
        self.capacity[(2 * id + 1) as usize]
    }
}

/// Provides source-sink maximum flow as a method on the graph
pub trait MaximumFlow: GraphNodeOrder + GraphEdges + Labels {
    /// Computes the maximum flow from `source` to `sink`. Fails with
    /// [`Error::NodeNotFound`] for absent endpoints and
    /// [`Error::InvalidWeight`] for negative capacities. Equal source
    /// and sink trivially carry zero flow.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("S A 3\nS B 2\nA T 2\nB T 3").unwrap());
    /// let result = g.max_flow("S", "T").unwrap();
    ///
    /// assert_eq!(result.max_flow, 4.0);
    /// ```
    fn max_flow(&self, source: &str, sink: &str) -> Result<MaxFlowResult>
    where
        Self: Sized,
    {
        let s = self.require_node(source)?;
        let t = self.require_node(sink)?;
        if let Some(weight) = self.first_negative_weight() {
            return Err(Error::InvalidWeight { weight });
        }

        let mut residual = ResidualNetwork::new(self);
        let mut max_flow = 0.0;

        if s != t {
            let mut parent_arc = vec![INVALID_ARC; self.len()];
            while residual.find_augmenting_path(s, t, &mut parent_arc) {
                max_flow += residual.augment(s, t, &parent_arc);
            }
        }

        let flows = (0..self.number_of_edges())
            .map(|id| {
                let e = self.edge(id);
                EdgeFlow {
                    from: self.label_of(e.source).to_string(),
                    to: self.label_of(e.target).to_string(),
                    capacity: e.weight,
                    flow: residual.flow_through(id),
                }
            })
            .collect();

        Ok(MaxFlowResult { max_flow, flows })
    }
}

impl<G: GraphNodeOrder + GraphEdges + Labels> MaximumFlow for G {}
