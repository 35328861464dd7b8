/*!
# Engine

The two entry families the surrounding request-handling layer calls
into: [`run`] executes one algorithm of the fixed catalogue against a
freshly built snapshot, [`convert`] renders one of the three
representations. Parsing lives in [`crate::io`].

The catalogue is a closed enum matched exhaustively — adding a variant
without a handler is a compile error, not a run-time "not found"
branch. Unknown wire names are rejected while parsing the
[`AlgorithmKind`], before any graph work happens.

Every call builds its own [`GraphModel`] from the records it was
handed: the engine holds no state between invocations, and the
"current graph" convenience slot of the surrounding application stays
entirely on the caller's side.
*/

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::{
    algo::*,
    convert::{Representation, RepresentationOutput, Representations},
    edge::EdgeRecord,
    error::*,
    model::GraphModel,
};

/// The fixed catalogue of algorithms the engine executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    TraverseBfs,
    TraverseDfs,
    ShortestPath,
    MstPrim,
    MstKruskal,
    MaxFlow,
    BipartiteCheck,
    EulerianFleury,
    EulerianHierholzer,
}

impl AlgorithmKind {
    /// The wire name of this algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Self::TraverseBfs => "traverse-bfs",
            Self::TraverseDfs => "traverse-dfs",
            Self::ShortestPath => "shortest-path",
            Self::MstPrim => "mst-prim",
            Self::MstKruskal => "mst-kruskal",
            Self::MaxFlow => "max-flow",
            Self::BipartiteCheck => "bipartite-check",
            Self::EulerianFleury => "eulerian-fleury",
            Self::EulerianHierholzer => "eulerian-hierholzer",
        }
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "traverse-bfs" => Ok(Self::TraverseBfs),
            "traverse-dfs" => Ok(Self::TraverseDfs),
            "shortest-path" => Ok(Self::ShortestPath),
            "mst-prim" => Ok(Self::MstPrim),
            "mst-kruskal" => Ok(Self::MstKruskal),
            "max-flow" => Ok(Self::MaxFlow),
            "bipartite-check" => Ok(Self::BipartiteCheck),
            "eulerian-fleury" => Ok(Self::EulerianFleury),
            "eulerian-hierholzer" => Ok(Self::EulerianHierholzer),
            _ => Err(Error::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// One result variant per algorithm family. Serialized untagged, so
/// the boundary keeps each family's own JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AlgorithmResult {
    Traversal(TraversalResult),
    ShortestPath(ShortestPathResult),
    SpanningTree(SpanningTreeResult),
    MaxFlow(MaxFlowResult),
    Bipartite(BipartiteResult),
    Eulerian(EulerianResult),
}

/// Executes one algorithm against a fresh snapshot of the given
/// records. `start` doubles as the flow source, `target` as the flow
/// sink; algorithms that need them fail with
/// [`Error::MissingEndpoint`] when they are absent.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let records = parse_edge_list("A B 1\nB C 2\nA C 4").unwrap();
/// let kind: AlgorithmKind = "shortest-path".parse().unwrap();
///
/// let result = run(kind, &records, Some("A"), Some("C")).unwrap();
/// let AlgorithmResult::ShortestPath(paths) = result else {
///     unreachable!()
/// };
/// assert_eq!(paths.distances["C"], Some(3.0));
/// ```
pub fn run(
    kind: AlgorithmKind,
    records: &[EdgeRecord],
    start: Option<&str>,
    target: Option<&str>,
) -> Result<AlgorithmResult> {
    let model = GraphModel::from_records(records);

    match kind {
        AlgorithmKind::TraverseBfs => model
            .traverse_bfs(required(start, "start")?)
            .map(AlgorithmResult::Traversal),
        AlgorithmKind::TraverseDfs => model
            .traverse_dfs(required(start, "start")?)
            .map(AlgorithmResult::Traversal),
        AlgorithmKind::ShortestPath => model
            .shortest_path(required(start, "start")?, target)
            .map(AlgorithmResult::ShortestPath),
        AlgorithmKind::MstPrim => Ok(AlgorithmResult::SpanningTree(model.prim_forest())),
        AlgorithmKind::MstKruskal => Ok(AlgorithmResult::SpanningTree(model.kruskal_forest())),
        AlgorithmKind::MaxFlow => model
            .max_flow(required(start, "source")?, required(target, "sink")?)
            .map(AlgorithmResult::MaxFlow),
        AlgorithmKind::BipartiteCheck => Ok(AlgorithmResult::Bipartite(model.bipartite_check())),
        AlgorithmKind::EulerianFleury => model.fleury().map(AlgorithmResult::Eulerian),
        AlgorithmKind::EulerianHierholzer => model.hierholzer().map(AlgorithmResult::Eulerian),
    }
}

/// Renders one representation of a fresh snapshot of the given records
///
/// # Examples
/// ```
/// use wgraphs::{convert::*, prelude::*};
///
/// let records = parse_edge_list("A B 2").unwrap();
/// let RepresentationOutput::Visualization(viz) =
///     convert(&records, Representation::Visualization)
/// else {
///     unreachable!()
/// };
/// assert_eq!(viz.nodes.len(), 2);
/// ```
pub fn convert(records: &[EdgeRecord], target: Representation) -> RepresentationOutput {
    GraphModel::from_records(records).represent(target)
}

fn required<'a>(value: Option<&'a str>, param: &'static str) -> Result<&'a str> {
    value.ok_or(Error::MissingEndpoint { param })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_edge_list;

    fn records(text: &str) -> Vec<EdgeRecord> {
        parse_edge_list(text).unwrap()
    }

    #[test]
    fn every_wire_name_round_trips() {
        for kind in [
            AlgorithmKind::TraverseBfs,
            AlgorithmKind::TraverseDfs,
            AlgorithmKind::ShortestPath,
            AlgorithmKind::MstPrim,
            AlgorithmKind::MstKruskal,
            AlgorithmKind::MaxFlow,
            AlgorithmKind::BipartiteCheck,
            AlgorithmKind::EulerianFleury,
            AlgorithmKind::EulerianHierholzer,
        ] {
            assert_eq!(kind.name().parse::<AlgorithmKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_names_are_unsupported() {
        assert_eq!(
            "bellman-ford".parse::<AlgorithmKind>(),
            Err(Error::UnsupportedAlgorithm {
                name: "bellman-ford".to_string()
            })
        );
    }

    #[test]
    fn missing_endpoints_are_contract_violations() {
        let r = records("A B 1");
        assert_eq!(
            run(AlgorithmKind::TraverseBfs, &r, None, None),
            Err(Error::MissingEndpoint { param: "start" })
        );
        assert_eq!(
            run(AlgorithmKind::MaxFlow, &r, Some("A"), None),
            Err(Error::MissingEndpoint { param: "sink" })
        );
    }

    #[test]
    fn dispatch_reaches_every_family() {
        let r = records("A B 1\nB C 1\nC A 1");

        assert!(matches!(
            run(AlgorithmKind::TraverseBfs, &r, Some("A"), None),
            Ok(AlgorithmResult::Traversal(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::TraverseDfs, &r, Some("A"), None),
            Ok(AlgorithmResult::Traversal(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::ShortestPath, &r, Some("A"), Some("C")),
            Ok(AlgorithmResult::ShortestPath(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::MstPrim, &r, None, None),
            Ok(AlgorithmResult::SpanningTree(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::MstKruskal, &r, None, None),
            Ok(AlgorithmResult::SpanningTree(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::MaxFlow, &r, Some("A"), Some("C")),
            Ok(AlgorithmResult::MaxFlow(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::BipartiteCheck, &r, None, None),
            Ok(AlgorithmResult::Bipartite(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::EulerianFleury, &r, None, None),
            Ok(AlgorithmResult::Eulerian(_))
        ));
        assert!(matches!(
            run(AlgorithmKind::EulerianHierholzer, &r, None, None),
            Ok(AlgorithmResult::Eulerian(_))
        ));
    }

    #[test]
    fn triangle_is_not_bipartite_via_the_engine() {
        let r = records("A B 1\nB C 1\nC A 1");
        let Ok(AlgorithmResult::Bipartite(result)) =
            run(AlgorithmKind::BipartiteCheck, &r, None, None)
        else {
            panic!("expected a bipartite result");
        };
        assert!(!result.bipartite);
    }

    #[test]
    fn results_serialize_in_their_own_shape() {
        let r = records("A B 1");
        let result = run(AlgorithmKind::TraverseBfs, &r, Some("A"), None).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["order"][0], "A");
        assert!(json.get("bipartite").is_none());

        let result = run(AlgorithmKind::BipartiteCheck, &r, None, None).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["bipartite"], true);

        let result = run(AlgorithmKind::ShortestPath, &r, Some("A"), Some("B")).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distances"]["B"], 1.0);
        assert_eq!(json["path"][0], "A");
    }

    #[test]
    fn unreachable_distances_serialize_as_null() {
        let r = records("A B 1\nC D 1");
        let result = run(AlgorithmKind::ShortestPath, &r, Some("A"), Some("C")).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distances"]["C"], serde_json::Value::Null);
        assert_eq!(json["path"], serde_json::Value::Null);
    }

    #[test]
    fn convert_dispatches_all_three() {
        let r = records("A B 1");
        assert!(matches!(
            convert(&r, Representation::AdjacencyList),
            RepresentationOutput::AdjacencyList(_)
        ));
        assert!(matches!(
            convert(&r, Representation::AdjacencyMatrix),
            RepresentationOutput::AdjacencyMatrix(_)
        ));
        assert!(matches!(
            convert(&r, Representation::Visualization),
            RepresentationOutput::Visualization(_)
        ));
    }
}
