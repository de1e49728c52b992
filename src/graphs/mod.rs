use std::{fmt::Debug, hash::Hash};

use serde::{Deserialize, Serialize};

pub mod weighted_graph;

pub type Vertex = u32;
pub type Distance = f64;

/// Distance of a vertex no search has reached yet.
pub const INFINITY: Distance = Distance::INFINITY;

/// Bounds a vertex label has to satisfy: hashable for interning, `Debug`
/// for error messages. Implemented for every type that qualifies.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Distance,
}

impl Edge {
    pub fn new(tail: Vertex, head: Vertex, weight: Distance) -> Edge {
        Edge { tail, head, weight }
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn headless(&self) -> HeadlessEdge {
        HeadlessEdge {
            tail: self.tail,
            weight: self.weight,
        }
    }
}

/// Out-adjacency entry, the tail is implied by the list the edge sits in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Distance,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> Edge {
        Edge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

/// In-adjacency entry, the head is implied by the list the edge sits in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadlessEdge {
    pub tail: Vertex,
    pub weight: Distance,
}

impl HeadlessEdge {
    pub fn set_head(&self, head: Vertex) -> Edge {
        Edge {
            tail: self.tail,
            head,
            weight: self.weight,
        }
    }
}

/// Dense out-adjacency view over the vertex index space `0..vertex_count`.
///
/// Dijkstra runs against this trait so it can serve both the labelled graph
/// and Johnson's private reweighted adjacency.
pub trait Adjacency {
    fn vertex_count(&self) -> usize;

    fn out_edges(&self, tail: Vertex) -> &[TaillessEdge];
}
