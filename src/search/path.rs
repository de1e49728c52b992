use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex, INFINITY};

/// A reconstructed route and its total weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Distance and predecessor tables owned by one single-source run.
///
/// Distances default to [`INFINITY`] and only ever decrease during a run;
/// predecessors are `None` for the source and for unreached vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: Vertex,
    distances: Vec<Distance>,
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPathTree {
    pub(crate) fn new(vertex_count: usize, source: Vertex) -> ShortestPathTree {
        let mut distances = vec![INFINITY; vertex_count];
        distances[source as usize] = 0.0;

        ShortestPathTree {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors[vertex as usize]
    }

    /// Lowers the tentative distance of `head` if the route through `tail`
    /// is shorter. Returns whether an update happened.
    pub(crate) fn relax(&mut self, tail: Vertex, head: Vertex, weight: Distance) -> bool {
        let alternative = self.distances[tail as usize] + weight;
        if alternative < self.distances[head as usize] {
            self.distances[head as usize] = alternative;
            self.predecessors[head as usize] = Some(tail);
            return true;
        }
        false
    }

    /// Whether [`Self::relax`] would update, without mutating. Used by the
    /// Bellman-Ford detection pass.
    pub(crate) fn would_relax(&self, tail: Vertex, head: Vertex, weight: Distance) -> bool {
        self.distances[tail as usize] + weight < self.distances[head as usize]
    }

    /// Walks predecessor links backward from `target` and reverses the
    /// collected route. `None` when the target was never reached.
    pub fn path_to(&self, target: Vertex) -> Option<Path> {
        if self.distances[target as usize] == INFINITY {
            return None;
        }

        let mut vertices = walk_links(target, self.source, self.predecessors.len(), |vertex| {
            self.predecessors[vertex as usize]
        })?;
        vertices.reverse();

        Some(Path {
            distance: self.distances[target as usize],
            vertices,
        })
    }
}

/// Follows `next` links from `start` until `goal`, collecting the visited
/// vertices inclusively.
///
/// The shared core of path reconstruction: the single-source trees walk
/// predecessor links backward, Floyd-Warshall walks next-hop links forward.
/// Iterative on purpose, and capped at `cap` steps so a corrupted link table
/// cannot loop forever; walking off the table or past the cap yields `None`.
pub(crate) fn walk_links(
    start: Vertex,
    goal: Vertex,
    cap: usize,
    next: impl Fn(Vertex) -> Option<Vertex>,
) -> Option<Vec<Vertex>> {
    let mut vertices = vec![start];
    let mut current = start;

    while current != goal {
        current = next(current)?;
        vertices.push(current);
        if vertices.len() > cap {
            return None;
        }
    }

    Some(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_starts_at_infinity_except_source() {
        let tree = ShortestPathTree::new(3, 1);
        assert_eq!(tree.distance(0), INFINITY);
        assert_eq!(tree.distance(1), 0.0);
        assert_eq!(tree.predecessor(1), None);
    }

    #[test]
    fn relax_only_lowers() {
        let mut tree = ShortestPathTree::new(2, 0);
        assert!(tree.relax(0, 1, 5.0));
        assert!(!tree.relax(0, 1, 5.0));
        assert!(tree.relax(0, 1, 2.0));
        assert_eq!(tree.distance(1), 2.0);
        assert_eq!(tree.predecessor(1), Some(0));
    }

    #[test]
    fn path_walks_back_to_source() {
        let mut tree = ShortestPathTree::new(4, 0);
        tree.relax(0, 1, 1.0);
        tree.relax(1, 2, 1.0);
        tree.relax(2, 3, 1.0);

        let path = tree.path_to(3).unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2, 3]);
        assert_eq!(path.distance, 3.0);

        let trivial = tree.path_to(0).unwrap();
        assert_eq!(trivial.vertices, vec![0]);
    }

    #[test]
    fn unreached_target_has_no_path() {
        let tree = ShortestPathTree::new(2, 0);
        assert!(tree.path_to(1).is_none());
    }

    #[test]
    fn cyclic_link_table_is_cut_off() {
        // A predecessor table that loops 1 -> 2 -> 1 and never reaches 0.
        let links = [None, Some(2), Some(1)];
        assert_eq!(walk_links(1, 0, links.len(), |v| links[v as usize]), None);
    }

    #[test]
    fn walking_off_the_table_is_no_path() {
        let links = [None, Some(0), None];
        assert_eq!(walk_links(2, 1, links.len(), |v| links[v as usize]), None);
    }
}
