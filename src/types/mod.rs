//! Core data types shared by both graph representations.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::{Directedness, VertexId};

/// Numeric edge weight.
///
/// The matrix representation stores weights directly in its cells, so a
/// weight of exactly `0.0` is indistinguishable from "no edge".
pub type Weight = f64;

/// Weight used when an edge is added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Matrix cell value meaning "no edge".
pub const NO_EDGE: Weight = 0.0;
