use itertools::Itertools;
use tracing::debug;

use super::{bellman_ford, dijkstra, path::ShortestPathTree, AllPairsPaths};
use crate::{
    error::ShortestPathError,
    graphs::{
        weighted_graph::WeightedDirectedGraph, Adjacency, Distance, Edge, Label, TaillessEdge,
        Vertex, INFINITY,
    },
};

/// All-pairs shortest paths via reweighting, for sparse graphs that may
/// contain negative edge weights. O(V·E log V).
///
/// A zero-weight edge from a synthetic auxiliary vertex to every vertex
/// makes the whole graph reachable; Bellman-Ford from that vertex yields a
/// potential per vertex, and shifting every edge weight by
/// `potential[tail] - potential[head]` removes all negative weights while
/// preserving the relative order of all routes between any pair. Dijkstra
/// then runs from every vertex on the shifted graph, and queries undo the
/// shift. All of this happens on private copies; the caller's graph is
/// never mutated and stays valid for the other engines.
pub struct Johnson<'a, V> {
    graph: &'a WeightedDirectedGraph<V>,
    potentials: Vec<Distance>,
    trees: Vec<ShortestPathTree>,
}

/// The reweighted out-adjacency Dijkstra runs on, without the auxiliary
/// vertex.
struct ReweightedGraph {
    out_edges: Vec<Vec<TaillessEdge>>,
}

impl Adjacency for ReweightedGraph {
    fn vertex_count(&self) -> usize {
        self.out_edges.len()
    }

    fn out_edges(&self, tail: Vertex) -> &[TaillessEdge] {
        &self.out_edges[tail as usize]
    }
}

impl<'a, V: Label> Johnson<'a, V> {
    pub fn new(graph: &'a WeightedDirectedGraph<V>) -> Result<Johnson<'a, V>, ShortestPathError> {
        let n = graph.vertex_count();
        let auxiliary = n as Vertex;

        // A negative cycle anywhere in the graph is reachable from the
        // auxiliary vertex, so Bellman-Ford failing here aborts the whole
        // run.
        let mut augmented_edges = graph.edges().to_vec();
        augmented_edges.extend(graph.vertices().map(|vertex| Edge::new(auxiliary, vertex, 0.0)));
        let potential_tree = bellman_ford::shortest_path_tree(n + 1, &augmented_edges, auxiliary)?;

        let potentials: Vec<Distance> = graph
            .vertices()
            .map(|vertex| potential_tree.distance(vertex))
            .collect();
        debug!(vertices = n, "potentials computed, reweighting edges");

        let mut reweighted = ReweightedGraph {
            out_edges: vec![Vec::new(); n],
        };
        for edge in graph.edges() {
            let weight =
                edge.weight + potentials[edge.tail as usize] - potentials[edge.head as usize];
            reweighted.out_edges[edge.tail as usize].push(TaillessEdge {
                head: edge.head,
                weight,
            });
        }

        let trees = graph
            .vertices()
            .map(|source| dijkstra::shortest_path_tree(&reweighted, source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Johnson {
            graph,
            potentials,
            trees,
        })
    }

    fn dense_distance(&self, source: Vertex, target: Vertex) -> Distance {
        let reweighted = self.trees[source as usize].distance(target);
        if reweighted == INFINITY {
            return INFINITY;
        }

        // Undo the shift to recover the distance in the original graph.
        reweighted - self.potentials[source as usize] + self.potentials[target as usize]
    }

    /// The smallest pairwise distance in the graph over all ordered pairs of
    /// distinct vertices, [`INFINITY`] when no pair is connected.
    pub fn min_distance(&self) -> Distance {
        self.graph
            .vertices()
            .cartesian_product(self.graph.vertices())
            .filter(|(source, target)| source != target)
            .map(|(source, target)| self.dense_distance(source, target))
            .fold(INFINITY, Distance::min)
    }
}

impl<V: Label> AllPairsPaths<V> for Johnson<'_, V> {
    fn distance(&self, source: &V, target: &V) -> Result<Distance, ShortestPathError> {
        let source = self.graph.vertex(source)?;
        let target = self.graph.vertex(target)?;
        Ok(self.dense_distance(source, target))
    }

    fn path(&self, source: &V, target: &V) -> Result<Vec<V>, ShortestPathError> {
        let source_vertex = self.graph.vertex(source)?;
        // Reweighting preserves which routes are shortest, so the
        // predecessor tree of the shifted graph reconstructs original
        // routes unchanged.
        dijkstra::resolve_path(self.graph, &self.trees[source_vertex as usize], target)
    }
}
