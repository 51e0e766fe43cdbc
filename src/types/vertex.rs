//! Vertex identifiers and graph directedness.

use std::fmt::Display;
use std::hash::Hash;

use serde::Serialize;

/// Bound for vertex identifiers: opaque, comparable, hashable, printable.
///
/// Blanket-implemented, so `String`, `&str`, and the integer types all qualify.
pub trait VertexId: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> VertexId for T {}

/// Whether edges are ordered pairs or symmetric. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Directedness {
    /// Adding (u, v) also adds (v, u) with the same weight.
    #[default]
    Undirected,
    /// Edges are independent per ordered pair.
    Directed,
}

impl Directedness {
    /// Build from a boolean "directed" flag.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// True for [`Directedness::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Return a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }
}

impl std::fmt::Display for Directedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
