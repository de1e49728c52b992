use ahash::{HashMap, HashMapExt};

use super::{Adjacency, Distance, Edge, HeadlessEdge, Label, TaillessEdge, Vertex};
use crate::error::ShortestPathError;

/// A weighted directed multigraph.
///
/// Labels are interned to dense [`Vertex`] indices in first-seen order, so
/// iteration order is the order in which vertices were first mentioned by
/// `add_edge`. Adding the same `(tail, head)` pair twice creates two
/// distinct parallel edges; self-loops are allowed (a negative self-loop is
/// by definition a negative cycle and is caught by the cycle-detecting
/// engines). There is no removal operation.
///
/// Every edge is recorded three times: in its tail's outgoing list, in its
/// head's incoming list, and in the flat edge list that Bellman-Ford and
/// Floyd-Warshall enumerate directly.
#[derive(Clone, Debug)]
pub struct WeightedDirectedGraph<V> {
    labels: Vec<V>,
    indices: HashMap<V, Vertex>,
    out_edges: Vec<Vec<TaillessEdge>>,
    in_edges: Vec<Vec<HeadlessEdge>>,
    edges: Vec<Edge>,
}

impl<V: Label> Default for WeightedDirectedGraph<V> {
    fn default() -> Self {
        WeightedDirectedGraph::new()
    }
}

impl<V: Label> WeightedDirectedGraph<V> {
    pub fn new() -> WeightedDirectedGraph<V> {
        WeightedDirectedGraph {
            labels: Vec::new(),
            indices: HashMap::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn from_edges(edges: impl IntoIterator<Item = (V, V, Distance)>) -> WeightedDirectedGraph<V> {
        let mut graph = WeightedDirectedGraph::new();
        for (tail, head, weight) in edges {
            graph.add_edge(tail, head, weight);
        }
        graph
    }

    /// Inserts an edge, creating the endpoint vertices if absent.
    ///
    /// This is the only graph mutation entry point.
    pub fn add_edge(&mut self, tail: V, head: V, weight: Distance) {
        let tail = self.intern(tail);
        let head = self.intern(head);
        let edge = Edge { tail, head, weight };

        self.out_edges[tail as usize].push(edge.tailless());
        self.in_edges[head as usize].push(edge.headless());
        self.edges.push(edge);
    }

    fn intern(&mut self, label: V) -> Vertex {
        if let Some(&vertex) = self.indices.get(&label) {
            return vertex;
        }

        let vertex = self.labels.len() as Vertex;
        self.indices.insert(label.clone(), vertex);
        self.labels.push(label);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        vertex
    }

    /// Resolves a label to its dense vertex index.
    pub fn vertex(&self, label: &V) -> Result<Vertex, ShortestPathError> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| ShortestPathError::UnknownVertex(format!("{:?}", label)))
    }

    /// The label a dense vertex index was interned from.
    ///
    /// # Panics
    /// Panics if `vertex` is not an index of this graph.
    pub fn label(&self, vertex: Vertex) -> &V {
        &self.labels[vertex as usize]
    }

    /// All vertices in first-seen order. The iterator is `Clone` so callers
    /// can pair it with itself.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + Clone {
        0..self.labels.len() as Vertex
    }

    /// All labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &V> {
        self.labels.iter()
    }

    /// The flat edge list in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn in_edges(&self, head: Vertex) -> &[HeadlessEdge] {
        &self.in_edges[head as usize]
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.labels.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }
}

impl<V: Label> Adjacency for WeightedDirectedGraph<V> {
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn out_edges(&self, tail: Vertex) -> &[TaillessEdge] {
        &self.out_edges[tail as usize]
    }
}
