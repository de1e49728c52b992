use tracing::debug;

use super::{path::ShortestPathTree, SingleSourcePaths};
use crate::{
    error::ShortestPathError,
    graphs::{weighted_graph::WeightedDirectedGraph, Adjacency, Distance, Label, Vertex},
    queue::IndexedHeapQueue,
};

/// Grows a shortest path tree from `source` over any dense adjacency.
///
/// Precondition: all edge weights are non-negative. This is not checked;
/// with negative weights the result is undefined (caller responsibility,
/// use Bellman-Ford instead). Runs in O(E log V).
pub fn shortest_path_tree(
    graph: &impl Adjacency,
    source: Vertex,
) -> Result<ShortestPathTree, ShortestPathError> {
    let mut tree = ShortestPathTree::new(graph.vertex_count(), source);
    let mut queue = IndexedHeapQueue::new(graph.vertex_count());
    queue.insert_or_decrease(source, 0.0);

    while !queue.is_empty() {
        // Once extracted, a vertex's distance is final.
        let (_, tail) = queue.extract_min()?;
        let distance_tail = tree.distance(tail);

        for edge in graph.out_edges(tail) {
            if tree.relax(tail, edge.head, edge.weight) {
                queue.insert_or_decrease(edge.head, distance_tail + edge.weight);
            }
        }
    }

    Ok(tree)
}

/// Single-source shortest paths for graphs with non-negative edge weights.
pub struct Dijkstra<'a, V> {
    graph: &'a WeightedDirectedGraph<V>,
    tree: ShortestPathTree,
}

impl<'a, V: Label> Dijkstra<'a, V> {
    pub fn new(
        graph: &'a WeightedDirectedGraph<V>,
        source: &V,
    ) -> Result<Dijkstra<'a, V>, ShortestPathError> {
        let source = graph.vertex(source)?;
        let tree = shortest_path_tree(graph, source)?;
        debug!(source, "dijkstra tree complete");

        Ok(Dijkstra { graph, tree })
    }

    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }
}

impl<V: Label> SingleSourcePaths<V> for Dijkstra<'_, V> {
    fn distance_to(&self, target: &V) -> Result<Distance, ShortestPathError> {
        let target = self.graph.vertex(target)?;
        Ok(self.tree.distance(target))
    }

    fn path_to(&self, target: &V) -> Result<Vec<V>, ShortestPathError> {
        resolve_path(self.graph, &self.tree, target)
    }
}

/// Shared label translation for the tree-producing engines: dense route out,
/// labels back in.
pub(crate) fn resolve_path<V: Label>(
    graph: &WeightedDirectedGraph<V>,
    tree: &ShortestPathTree,
    target: &V,
) -> Result<Vec<V>, ShortestPathError> {
    let target_vertex = graph.vertex(target)?;
    let path = tree.path_to(target_vertex).ok_or_else(|| {
        ShortestPathError::NoPath(
            format!("{:?}", graph.label(tree.source())),
            format!("{:?}", target),
        )
    })?;

    Ok(path
        .vertices
        .iter()
        .map(|&vertex| graph.label(vertex).clone())
        .collect())
}
