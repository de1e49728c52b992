use thiserror::Error;

/// Failures surfaced by graph queries and the shortest path engines.
///
/// All variants are deterministic consequences of the input graph, so none
/// of them is ever retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortestPathError {
    /// A query referenced a vertex label that was never inserted.
    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    /// A reachable negative-cost cycle makes "shortest path" undefined.
    /// No partial distance table is returned.
    #[error("graph contains a negative cost cycle")]
    NegativeCycle,

    /// `extract_min` was called on an empty queue. This is an internal
    /// invariant violation, not something callers are expected to handle.
    #[error("extract_min called on an empty queue")]
    EmptyQueue,

    /// No route connects the target back to the source.
    #[error("no path from {0} to {1}")]
    NoPath(String, String),
}
