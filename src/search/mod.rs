use crate::{
    error::ShortestPathError,
    graphs::{Distance, Label},
};

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod path;

/// Query surface shared by the single-source engines.
pub trait SingleSourcePaths<V: Label> {
    /// Distance from the engine's source to `target`, [`crate::INFINITY`]
    /// when the target was never reached.
    fn distance_to(&self, target: &V) -> Result<Distance, ShortestPathError>;

    /// The shortest route from the source to `target`, inclusive of both.
    fn path_to(&self, target: &V) -> Result<Vec<V>, ShortestPathError>;
}

/// Query surface shared by the all-pairs engines.
pub trait AllPairsPaths<V: Label> {
    /// Distance between two vertices, [`crate::INFINITY`] when unconnected.
    fn distance(&self, source: &V, target: &V) -> Result<Distance, ShortestPathError>;

    /// The shortest route between two vertices, inclusive of both.
    fn path(&self, source: &V, target: &V) -> Result<Vec<V>, ShortestPathError>;
}
