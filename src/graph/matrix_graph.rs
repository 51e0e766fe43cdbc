//! Adjacency-matrix graph with numeric edge weights.

use crate::types::{
    Directedness, GraphError, GraphResult, VertexId, Weight, DEFAULT_WEIGHT, NO_EDGE,
};

use super::Graph;

/// Graph backed by a square weight matrix.
///
/// Position `i` in the identifier list is row and column `i` of the matrix.
/// Removing a vertex shifts every later position down by one, so positions
/// are re-resolved from the identifier list on every call and never cached.
///
/// A cell holding [`NO_EDGE`] means "no edge". Adding an edge with weight
/// `0.0` is therefore the same as not having it.
#[derive(Debug, Clone)]
pub struct MatrixGraph<V: VertexId> {
    /// Vertex identifiers; the index is the matrix position.
    names: Vec<V>,
    /// `matrix[i][j]` is the weight of edge names[i] -> names[j].
    matrix: Vec<Vec<Weight>>,
    directedness: Directedness,
}

impl<V: VertexId> MatrixGraph<V> {
    /// Create an empty graph.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            names: Vec::new(),
            matrix: Vec::new(),
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

    /// The weight matrix, rows in vertex order.
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Matrix position of `id`.
    pub fn index_of(&self, id: &V) -> GraphResult<usize> {
        self.names
            .iter()
            .position(|n| n == id)
            .ok_or_else(|| GraphError::unknown(id))
    }

    /// Identifier at matrix position `index`.
    pub fn vertex_at(&self, index: usize) -> GraphResult<&V> {
        self.names.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.names.len(),
        })
    }

    /// Set the weight of edge `from -> to` (and `to -> from` when undirected).
    ///
    /// Overwrites any previous weight.
    pub fn add_weighted_edge(&mut self, from: &V, to: &V, weight: Weight) -> GraphResult<()> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        if weight == NO_EDGE {
            log::warn!(
                "matrix graph: edge {} -> {} added with weight 0, stored as absent",
                from,
                to
            );
        }
        log::debug!("matrix graph: set edge {} -> {} = {}", from, to, weight);
        self.set(i, j, weight);
        Ok(())
    }

    /// Stored weight of `from -> to`, [`NO_EDGE`] when absent.
    pub fn edge_weight(&self, from: &V, to: &V) -> GraphResult<Weight> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.matrix[i][j])
    }

    fn set(&mut self, i: usize, j: usize, weight: Weight) {
        self.matrix[i][j] = weight;
        if !self.is_directed() {
            self.matrix[j][i] = weight;
        }
    }
}

impl<V: VertexId> Default for MatrixGraph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: VertexId> Graph for MatrixGraph<V> {
    type Vertex = V;

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn is_weighted(&self) -> bool {
        true
    }

    fn contains_vertex(&self, id: &V) -> bool {
        self.names.contains(id)
    }

    fn vertex_count(&self) -> usize {
        self.names.len()
    }

    fn vertices(&self) -> Vec<V> {
        self.names.clone()
    }

    fn add_vertex(&mut self, id: V) -> GraphResult<()> {
        if self.contains_vertex(&id) {
            return Err(GraphError::duplicate(&id));
        }
        log::debug!("matrix graph: add vertex {} at {}", id, self.names.len());
        self.names.push(id);
        for row in &mut self.matrix {
            row.push(NO_EDGE);
        }
        self.matrix.push(vec![NO_EDGE; self.names.len()]);
        Ok(())
    }

    fn add_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    fn remove_vertex(&mut self, id: &V) -> GraphResult<()> {
        let i = self.index_of(id)?;
        log::debug!("matrix graph: remove vertex {} at {}", id, i);
        self.names.remove(i);
        self.matrix.remove(i);
        for row in &mut self.matrix {
            row.remove(i);
        }
        Ok(())
    }

    /// Clears the cell(s). Removing an absent edge succeeds.
    fn remove_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        log::debug!("matrix graph: clear edge {} -> {}", from, to);
        self.set(i, j, NO_EDGE);
        Ok(())
    }

    fn adjacent(&self, from: &V, to: &V) -> GraphResult<bool> {
        Ok(self.edge_weight(from, to)? != NO_EDGE)
    }

    fn neighbors(&self, id: &V) -> GraphResult<Vec<V>> {
        Ok(self
            .weighted_neighbors(id)?
            .into_iter()
            .map(|(n, _)| n)
            .collect())
    }

    fn weighted_neighbors(&self, id: &V) -> GraphResult<Vec<(V, Weight)>> {
        let i = self.index_of(id)?;
        Ok(self.matrix[i]
            .iter()
            .zip(&self.names)
            .filter(|(w, _)| **w != NO_EDGE)
            .map(|(w, n)| (n.clone(), *w))
            .collect())
    }
}
