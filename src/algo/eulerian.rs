/*!
# Eulerian Circuits and Paths

Two constructions for a walk using every edge exactly once, behind one
shared precondition check: counting self-loops twice, an Eulerian
**circuit** exists iff the non-isolated nodes are connected and every
degree is even; an open **path** exists iff exactly two degrees are
odd. Anything else fails with a typed obstruction naming the violated
condition.

- **Fleury** walks edge by edge, never burning a bridge of the
  remaining multigraph unless it is the only option. The bridge set is
  recomputed after every removal, which is the algorithm's inherent
  cost driver (O(E²)).
- **Hierholzer** consumes edges along an explicit stack and splices
  sub-circuits on pop, touching every edge once (O(E)); no recursion,
  so deep trails cannot exhaust the call stack.

Both start at the first odd-degree node in sorted order (path case) or
the first non-isolated node (circuit case).
*/

use itertools::Itertools;
use serde::Serialize;

use super::{bridges::bridges_of_remaining, *};

/// Whether a trail is closed (circuit) or open (path)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailKind {
    Circuit,
    Path,
}

/// A complete Eulerian walk: |E| + 1 labels, every edge used once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EulerianResult {
    pub kind: TrailKind,
    pub trail: Vec<String>,
}

/// Provides Eulerian-trail constructions as methods on the graph
pub trait EulerianTrails: AdjacencyList + GraphEdges + Labels {
    /// Checks the existence precondition and returns the trail kind
    /// together with the start node, or the obstruction that rules a
    /// trail out.
    fn eulerian_kind(&self) -> Result<(TrailKind, Node)> {
        if self.is_edgeless() {
            return Err(Error::NoEulerianPath {
                obstruction: EulerianObstruction::NoEdges,
            });
        }

        if !self.non_isolated_connected() {
            return Err(Error::NoEulerianPath {
                obstruction: EulerianObstruction::Disconnected,
            });
        }

        let odd = self
            .vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect_vec();

        match odd.as_slice() {
            [] => {
                let start = self
                    .vertices_with_arcs()
                    .next()
                    .expect("graph has edges, so some node has arcs");
                Ok((TrailKind::Circuit, start))
            }
            [first, _] => Ok((TrailKind::Path, *first)),
            _ => Err(Error::NoEulerianPath {
                obstruction: EulerianObstruction::OddDegrees { odd: odd.len() },
            }),
        }
    }

    /// Constructs the trail edge by edge, always preferring (in input
    /// order) an incident edge that is not a bridge of the remaining
    /// multigraph, and taking a bridge only when forced.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B\nB C\nC D\nD A").unwrap());
    /// let result = g.fleury().unwrap();
    ///
    /// assert_eq!(result.kind, TrailKind::Circuit);
    /// assert_eq!(result.trail.len(), 5);
    /// ```
    fn fleury(&self) -> Result<EulerianResult> {
        let (kind, start) = self.eulerian_kind()?;
        let m = self.number_of_edges();

        let mut used = edge_set(m);
        let mut walk = vec![start];
        let mut position = start;

        for _ in 0..m {
            let bridges = bridges_of_remaining(self, &used);
            let candidates = || {
                self.arcs_of(position)
                    .iter()
                    .filter(|a| !used.contains(a.id as usize))
            };

            let arc = candidates()
                .find(|a| !bridges.contains(a.id as usize))
                .or_else(|| candidates().next())
                .copied()
                .expect("an eulerian graph always has an onward edge");

            used.insert(arc.id as usize);
            position = arc.target;
            walk.push(position);
        }

        Ok(self.render_trail(kind, walk))
    }

    /// Builds the trail by following unused edges along an explicit
    /// stack; every node popped with no edges left joins the final
    /// walk, which splices sub-circuits in automatically.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = GraphModel::from_records(&parse_edge_list("A B\nB C\nC D\nD A").unwrap());
    /// let result = g.hierholzer().unwrap();
    ///
    /// assert_eq!(result.kind, TrailKind::Circuit);
    /// assert_eq!(result.trail.first(), result.trail.last());
    /// ```
    fn hierholzer(&self) -> Result<EulerianResult> {
        let (kind, start) = self.eulerian_kind()?;

        let mut used = edge_set(self.number_of_edges());
        let mut cursor = vec![0usize; self.len()];
        let mut stack = vec![start];
        let mut walk = Vec::with_capacity(self.number_of_edges() as usize + 1);

        while let Some(&u) = stack.last() {
            let arcs = self.arcs_of(u);
            let c = &mut cursor[u as usize];
            while *c < arcs.len() && used.contains(arcs[*c].id as usize) {
                *c += 1;
            }

            if *c < arcs.len() {
                let arc = arcs[*c];
                *c += 1;
                used.insert(arc.id as usize);
                stack.push(arc.target);
            } else {
                walk.push(u);
                stack.pop();
            }
        }

        walk.reverse();
        Ok(self.render_trail(kind, walk))
    }

    #[doc(hidden)]
    fn render_trail(&self, kind: TrailKind, walk: Vec<Node>) -> EulerianResult {
        debug_assert_eq!(walk.len(), self.number_of_edges() as usize + 1);
        EulerianResult {
            kind,
            trail: walk
                .into_iter()
                .map(|u| self.label_of(u).to_string())
                .collect(),
        }
    }
}

impl<G: AdjacencyList + GraphEdges + Labels> EulerianTrails for G {}
