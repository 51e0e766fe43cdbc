//! dualgraph — in-memory graphs with two interchangeable representations.
//!
//! [`ListGraph`] stores per-vertex neighbor sequences, [`MatrixGraph`] a
//! square weight matrix. Both implement the [`Graph`] trait, and the
//! traversals and cycle detection are written once against it.

pub mod cli;
pub mod graph;
pub mod render;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first, depth_first, find_cycle_edge_from, has_cycle, has_cycle_from, traverse, Graph,
    GraphBuilder, ListGraph, MatrixGraph, TraversalOrder,
};
pub use render::{render, to_dot, write_dot, RenderConfig};
pub use types::{
    Directedness, GraphError, GraphResult, VertexId, Weight, DEFAULT_WEIGHT, NO_EDGE,
};
