use itertools::Itertools;
use tracing::debug;

use super::{path::walk_links, AllPairsPaths};
use crate::{
    error::ShortestPathError,
    graphs::{weighted_graph::WeightedDirectedGraph, Adjacency, Distance, Label, Vertex, INFINITY},
};

/// All-pairs shortest paths, tolerating negative edge weights. O(V³).
///
/// Holds a `|V|×|V|` distance matrix and a next-hop matrix: `next[i][j]` is
/// the vertex that follows `i` on the shortest route to `j`, so routes are
/// reconstructed by walking forward from the source.
pub struct FloydWarshall<'a, V> {
    graph: &'a WeightedDirectedGraph<V>,
    distances: Vec<Distance>,
    next_hops: Vec<Option<Vertex>>,
}

impl<'a, V: Label> FloydWarshall<'a, V> {
    pub fn new(
        graph: &'a WeightedDirectedGraph<V>,
    ) -> Result<FloydWarshall<'a, V>, ShortestPathError> {
        let n = graph.vertex_count();
        let mut distances = vec![INFINITY; n * n];
        let mut next_hops = vec![None; n * n];

        for vertex in 0..n {
            distances[vertex * n + vertex] = 0.0;
        }

        // Seed direct edges; parallel edges keep the cheapest one. A
        // negative self-loop lands on the diagonal and fails the scan below.
        for edge in graph.edges() {
            let cell = edge.tail as usize * n + edge.head as usize;
            if edge.weight < distances[cell] {
                distances[cell] = edge.weight;
                next_hops[cell] = Some(edge.head);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through_k = distances[i * n + k];
                if through_k == INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + distances[k * n + j];
                    if candidate < distances[i * n + j] {
                        distances[i * n + j] = candidate;
                        next_hops[i * n + j] = next_hops[i * n + k];
                    }
                }
            }
        }

        for vertex in 0..n {
            if distances[vertex * n + vertex] < 0.0 {
                debug!(vertex, "negative diagonal entry, negative cycle");
                return Err(ShortestPathError::NegativeCycle);
            }
        }

        Ok(FloydWarshall {
            graph,
            distances,
            next_hops,
        })
    }

    /// The smallest pairwise distance in the graph over all ordered pairs of
    /// distinct vertices, [`INFINITY`] when no pair is connected.
    pub fn min_distance(&self) -> Distance {
        let n = self.graph.vertex_count();
        (0..n)
            .cartesian_product(0..n)
            .filter(|(i, j)| i != j)
            .map(|(i, j)| self.distances[i * n + j])
            .fold(INFINITY, Distance::min)
    }

    fn cell(&self, source: Vertex, target: Vertex) -> usize {
        source as usize * self.graph.vertex_count() + target as usize
    }
}

impl<V: Label> AllPairsPaths<V> for FloydWarshall<'_, V> {
    fn distance(&self, source: &V, target: &V) -> Result<Distance, ShortestPathError> {
        let source = self.graph.vertex(source)?;
        let target = self.graph.vertex(target)?;
        Ok(self.distances[self.cell(source, target)])
    }

    fn path(&self, source: &V, target: &V) -> Result<Vec<V>, ShortestPathError> {
        let source_vertex = self.graph.vertex(source)?;
        let target_vertex = self.graph.vertex(target)?;

        let no_path = || {
            ShortestPathError::NoPath(format!("{:?}", source), format!("{:?}", target))
        };

        if self.distances[self.cell(source_vertex, target_vertex)] == INFINITY {
            return Err(no_path());
        }

        let vertices = walk_links(
            source_vertex,
            target_vertex,
            self.graph.vertex_count(),
            |vertex| self.next_hops[self.cell(vertex, target_vertex)],
        )
        .ok_or_else(no_path)?;

        Ok(vertices
            .iter()
            .map(|&vertex| self.graph.label(vertex).clone())
            .collect())
    }
}
