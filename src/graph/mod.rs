//! In-memory graph representations and the algorithms built on them.

pub mod builder;
pub mod cycle;
pub mod list_graph;
pub mod matrix_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use cycle::{find_cycle_edge_from, has_cycle, has_cycle_from};
pub use list_graph::ListGraph;
pub use matrix_graph::MatrixGraph;
pub use traversal::{breadth_first, depth_first, traverse, TraversalOrder};

use crate::types::{Directedness, GraphResult, VertexId, Weight};

/// The observable contract shared by [`ListGraph`] and [`MatrixGraph`].
///
/// Traversals and cycle detection are written once against this trait. Both
/// representations must agree on everything it exposes, up to neighbor order
/// and neighbor multiplicity.
pub trait Graph {
    /// Vertex identifier type.
    type Vertex: VertexId;

    /// Directedness fixed at construction.
    fn directedness(&self) -> Directedness;

    /// True when edges are ordered pairs.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// True if `id` is a vertex of this graph.
    fn contains_vertex(&self, id: &Self::Vertex) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// All vertex identifiers, in insertion order.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Insert a vertex with no edges. Fails with `DuplicateVertex`.
    fn add_vertex(&mut self, id: Self::Vertex) -> GraphResult<()>;

    /// Add an edge with the default weight. Fails with `UnknownVertex`.
    fn add_edge(&mut self, from: &Self::Vertex, to: &Self::Vertex) -> GraphResult<()>;

    /// Remove a vertex and every edge incident to it.
    fn remove_vertex(&mut self, id: &Self::Vertex) -> GraphResult<()>;

    /// Remove an edge (both directions when undirected).
    fn remove_edge(&mut self, from: &Self::Vertex, to: &Self::Vertex) -> GraphResult<()>;

    /// True if `to` is a neighbor of `from`.
    fn adjacent(&self, from: &Self::Vertex, to: &Self::Vertex) -> GraphResult<bool>;

    /// Snapshot of the neighbors of `id`, in the representation's order.
    fn neighbors(&self, id: &Self::Vertex) -> GraphResult<Vec<Self::Vertex>>;

    /// Neighbors of `id` paired with the weight of the connecting edge.
    fn weighted_neighbors(&self, id: &Self::Vertex) -> GraphResult<Vec<(Self::Vertex, Weight)>>;

    /// True when edge weights carry information worth displaying.
    fn is_weighted(&self) -> bool {
        false
    }

    /// Number of edges. An undirected edge, including a self-loop, counts once.
    fn edge_count(&self) -> usize {
        let mut entries = 0usize;
        let mut loops = 0usize;
        for v in self.vertices() {
            for n in self.neighbors(&v).unwrap_or_default() {
                entries += 1;
                if n == v {
                    loops += 1;
                }
            }
        }
        if self.is_directed() {
            entries
        } else {
            (entries + loops) / 2
        }
    }
}
