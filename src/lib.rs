//! Shortest paths on weighted directed graphs, including graphs with
//! negative edge weights.
//!
//! The crate ships four engines with different trade-offs:
//!
//! * [`search::dijkstra::Dijkstra`]: single source, non-negative weights,
//!   O(E log V).
//! * [`search::bellman_ford::BellmanFord`]: single source, negative weights
//!   allowed, detects negative cycles, O(V·E).
//! * [`search::floyd_warshall::FloydWarshall`]: all pairs, negative weights
//!   allowed, detects negative cycles, O(V³).
//! * [`search::johnson::Johnson`]: all pairs via reweighting, negative
//!   weights allowed, O(V·E log V), faster than Floyd-Warshall on sparse
//!   graphs.
//!
//! A caller builds a [`graphs::weighted_graph::WeightedDirectedGraph`] by
//! repeated `add_edge` calls, hands it to an engine, and queries distances
//! and reconstructed routes through the [`search::SingleSourcePaths`] and
//! [`search::AllPairsPaths`] traits.

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;

pub use crate::{
    error::ShortestPathError,
    graphs::{weighted_graph::WeightedDirectedGraph, Distance, Vertex, INFINITY},
    search::{AllPairsPaths, SingleSourcePaths},
};
