/*!
# Errors

Every fallible operation in this crate returns a typed
[`Error`](crate::error::Error); nothing here panics on malformed input,
logs, or formats user-facing prose beyond `Display`. Presentation is
the caller's job.
*/

use serde::Serialize;
use thiserror::Error;

use crate::edge::Weight;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A malformed edge-list line. `line` is 1-based.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: ParseReason },

    /// A start/target/source/sink label that is not an endpoint of any edge
    #[error("node `{label}` is not part of the graph")]
    NodeNotFound { label: String },

    /// A negative weight where the requested algorithm needs non-negativity
    #[error("edge weight {weight} is negative, but the algorithm requires non-negative weights")]
    InvalidWeight { weight: Weight },

    /// The Eulerian precondition does not hold; the obstruction states
    /// which condition failed.
    #[error("no eulerian trail exists: {obstruction}")]
    NoEulerianPath { obstruction: EulerianObstruction },

    /// An algorithm name outside the fixed catalogue (caller contract violation)
    #[error("unsupported algorithm `{name}`")]
    UnsupportedAlgorithm { name: String },

    /// A required start/target argument was not supplied (caller contract violation)
    #[error("algorithm requires the `{param}` argument")]
    MissingEndpoint { param: &'static str },
}

/// What exactly went wrong on an edge-list line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseReason {
    #[error("expected `<from> <to> [weight]`, found {found} token(s)")]
    WrongTokenCount { found: usize },

    #[error("cannot parse weight `{token}` as a number")]
    UnparsableWeight { token: String },

    #[error("weight `{value}` is not finite")]
    NonFiniteWeight { value: Weight },
}

/// Why no Eulerian circuit or path exists for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum EulerianObstruction {
    #[error("the graph has no edges")]
    NoEdges,

    #[error("the edges do not form a single connected component")]
    Disconnected,

    /// A circuit needs zero odd-degree nodes, an open path exactly two.
    #[error("{odd} nodes have odd degree (a circuit needs 0, an open path exactly 2)")]
    OddDegrees { odd: usize },
}
