use tracing::debug;

use super::{
    dijkstra::resolve_path,
    path::ShortestPathTree,
    SingleSourcePaths,
};
use crate::{
    error::ShortestPathError,
    graphs::{weighted_graph::WeightedDirectedGraph, Distance, Edge, Label, Vertex},
};

/// Grows a shortest path tree from `source`, tolerating negative weights.
///
/// Runs `vertex_count` relaxation passes over the full edge list, then one
/// detection pass: an edge that would still relax proves a negative cycle
/// reachable from the source, and the run fails without a result.
/// Runs in O(V·E).
pub fn shortest_path_tree(
    vertex_count: usize,
    edges: &[Edge],
    source: Vertex,
) -> Result<ShortestPathTree, ShortestPathError> {
    let mut tree = ShortestPathTree::new(vertex_count, source);

    for _ in 0..vertex_count {
        for edge in edges {
            tree.relax(edge.tail, edge.head, edge.weight);
        }
    }

    for edge in edges {
        if tree.would_relax(edge.tail, edge.head, edge.weight) {
            debug!(
                tail = edge.tail,
                head = edge.head,
                "relaxation after |V| passes, negative cycle"
            );
            return Err(ShortestPathError::NegativeCycle);
        }
    }

    Ok(tree)
}

/// Single-source shortest paths for graphs that may contain negative edge
/// weights. Fails with [`ShortestPathError::NegativeCycle`] when a reachable
/// negative-cost cycle makes the answer undefined.
pub struct BellmanFord<'a, V> {
    graph: &'a WeightedDirectedGraph<V>,
    tree: ShortestPathTree,
}

impl<'a, V: Label> BellmanFord<'a, V> {
    pub fn new(
        graph: &'a WeightedDirectedGraph<V>,
        source: &V,
    ) -> Result<BellmanFord<'a, V>, ShortestPathError> {
        let source = graph.vertex(source)?;
        let tree = shortest_path_tree(
            graph.number_of_vertices() as usize,
            graph.edges(),
            source,
        )?;

        Ok(BellmanFord { graph, tree })
    }

    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }
}

impl<V: Label> SingleSourcePaths<V> for BellmanFord<'_, V> {
    fn distance_to(&self, target: &V) -> Result<Distance, ShortestPathError> {
        let target = self.graph.vertex(target)?;
        Ok(self.tree.distance(target))
    }

    fn path_to(&self, target: &V) -> Result<Vec<V>, ShortestPathError> {
        resolve_path(self.graph, &self.tree, target)
    }
}
