//! Fluent API for building graphs in either representation.

use crate::types::{Directedness, GraphResult, VertexId, Weight, DEFAULT_WEIGHT};

use super::{Graph, ListGraph, MatrixGraph};

/// Fluent builder that records vertices and edges, then replays them into a
/// [`ListGraph`] or a [`MatrixGraph`].
///
/// Replaying goes through the normal mutation operations, so duplicate or
/// unknown vertices surface as errors from `build_*`.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V: VertexId> {
    directedness: Directedness,
    vertices: Vec<V>,
    edges: Vec<(V, V, Weight)>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new builder.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: V) -> Self {
        self.vertices.push(id);
        self
    }

    /// Add several vertices in order.
    pub fn vertices(mut self, ids: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(ids);
        self
    }

    /// Add an edge with the default weight.
    pub fn edge(self, from: V, to: V) -> Self {
        self.weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Add a weighted edge. The list representation ignores the weight.
    pub fn weighted_edge(mut self, from: V, to: V, weight: Weight) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Build an adjacency-list graph.
    pub fn build_list(self) -> GraphResult<ListGraph<V>> {
        let mut graph = ListGraph::new(self.directedness);
        for v in self.vertices {
            graph.add_vertex(v)?;
        }
        for (from, to, _) in &self.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Build an adjacency-matrix graph.
    pub fn build_matrix(self) -> GraphResult<MatrixGraph<V>> {
        let mut graph = MatrixGraph::new(self.directedness);
        for v in self.vertices {
            graph.add_vertex(v)?;
        }
        for (from, to, weight) in &self.edges {
            graph.add_weighted_edge(from, to, *weight)?;
        }
        Ok(graph)
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new(Directedness::Undirected)
    }
}
