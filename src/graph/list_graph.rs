//! Adjacency-list graph: each vertex maps to an ordered sequence of neighbors.

use std::collections::HashMap;

use crate::types::{Directedness, GraphError, GraphResult, VertexId, Weight, DEFAULT_WEIGHT};

use super::Graph;

/// Graph backed by per-vertex neighbor sequences.
///
/// Neighbor sequences keep insertion order and are not deduplicated: adding
/// the same edge twice stores it twice, and `remove_edge` takes out one copy.
///
/// An undirected self-loop `add_edge(a, a)` is stored once (`[a]`, not
/// `[a, a]`), matching the single matrix cell, and counts as one edge.
#[derive(Debug, Clone)]
pub struct ListGraph<V: VertexId> {
    /// Vertex identifiers in insertion order.
    order: Vec<V>,
    /// Neighbor sequence per vertex.
    adjacency: HashMap<V, Vec<V>>,
    directedness: Directedness,
}

impl<V: VertexId> ListGraph<V> {
    /// Create an empty graph.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            directedness,
        }
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// The whole adjacency mapping, in vertex insertion order.
    pub fn adjacency_list(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.order
            .iter()
            .map(move |v| (v, self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])))
    }

    fn list(&self, id: &V) -> GraphResult<&Vec<V>> {
        self.adjacency.get(id).ok_or_else(|| GraphError::unknown(id))
    }

    fn require(&self, id: &V) -> GraphResult<()> {
        self.list(id).map(|_| ())
    }
}

impl<V: VertexId> Default for ListGraph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: VertexId> Graph for ListGraph<V> {
    type Vertex = V;

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn contains_vertex(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn vertices(&self) -> Vec<V> {
        self.order.clone()
    }

    fn add_vertex(&mut self, id: V) -> GraphResult<()> {
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::duplicate(&id));
        }
        log::debug!("list graph: add vertex {}", id);
        self.adjacency.insert(id.clone(), Vec::new());
        self.order.push(id);
        Ok(())
    }

    fn add_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        self.require(from)?;
        self.require(to)?;

        log::debug!("list graph: add edge {} -> {}", from, to);
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(to.clone());
        }
        // A self-loop is stored once, as in the matrix.
        if !self.is_directed() && from != to {
            if let Some(list) = self.adjacency.get_mut(to) {
                list.push(from.clone());
            }
        }
        Ok(())
    }

    fn remove_vertex(&mut self, id: &V) -> GraphResult<()> {
        if self.adjacency.remove(id).is_none() {
            return Err(GraphError::unknown(id));
        }
        log::debug!("list graph: remove vertex {}", id);
        self.order.retain(|v| v != id);
        for list in self.adjacency.values_mut() {
            list.retain(|n| n != id);
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let list = self.list(from)?;
        self.require(to)?;
        let pos = list
            .iter()
            .position(|n| n == to)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        log::debug!("list graph: remove edge {} -> {}", from, to);
        if let Some(list) = self.adjacency.get_mut(from) {
            list.remove(pos);
        }
        if !self.is_directed() && from != to {
            if let Some(list) = self.adjacency.get_mut(to) {
                if let Some(back) = list.iter().position(|n| n == from) {
                    list.remove(back);
                }
            }
        }
        Ok(())
    }

    fn adjacent(&self, from: &V, to: &V) -> GraphResult<bool> {
        let list = self.list(from)?;
        self.require(to)?;
        Ok(list.contains(to))
    }

    fn neighbors(&self, id: &V) -> GraphResult<Vec<V>> {
        self.list(id).cloned()
    }

    fn weighted_neighbors(&self, id: &V) -> GraphResult<Vec<(V, Weight)>> {
        Ok(self
            .list(id)?
            .iter()
            .map(|n| (n.clone(), DEFAULT_WEIGHT))
            .collect())
    }
}
