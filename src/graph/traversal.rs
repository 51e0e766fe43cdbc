//! Single-source traversals (depth-first, breadth-first).

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Visiting order for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TraversalOrder {
    /// Stack-driven; exhausts one branch before backtracking.
    DepthFirst,
    /// Queue-driven; level order from the start vertex.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Parse an order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Visited flags for every vertex, all false, enumerated without touching
/// the graph. Fails if `start` is not a vertex.
pub(crate) fn visited_map<G: Graph + ?Sized>(
    graph: &G,
    start: &G::Vertex,
) -> GraphResult<HashMap<G::Vertex, bool>> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::unknown(start));
    }
    Ok(graph.vertices().into_iter().map(|v| (v, false)).collect())
}

/// Set the flag for `v`; true if it was previously unset.
pub(crate) fn mark<V: std::hash::Hash + Eq>(visited: &mut HashMap<V, bool>, v: &V) -> bool {
    match visited.get_mut(v) {
        Some(seen) if !*seen => {
            *seen = true;
            true
        }
        _ => false,
    }
}

/// Depth-first traversal from `start` using an explicit stack.
///
/// Neighbors are pushed in reverse of their reported order, so the first
/// reported neighbor is visited next. Vertices are marked when pushed, so
/// each appears on the stack at most once. Only vertices reachable from
/// `start` are returned.
pub fn depth_first<G: Graph + ?Sized>(graph: &G, start: &G::Vertex) -> GraphResult<Vec<G::Vertex>> {
    let mut visited = visited_map(graph, start)?;
    mark(&mut visited, start);

    let mut stack = vec![start.clone()];
    let mut order = Vec::with_capacity(visited.len());

    while let Some(current) = stack.pop() {
        for neighbor in graph.neighbors(&current)?.into_iter().rev() {
            if mark(&mut visited, &neighbor) {
                stack.push(neighbor);
            }
        }
        order.push(current);
    }

    log::trace!("depth-first from {} visited {} vertices", start, order.len());
    Ok(order)
}

/// Breadth-first traversal from `start` using a FIFO queue.
///
/// Vertices are marked when enqueued. Returns the reachable vertices in
/// level order, neighbors within a level in their reported order.
pub fn breadth_first<G: Graph + ?Sized>(
    graph: &G,
    start: &G::Vertex,
) -> GraphResult<Vec<G::Vertex>> {
    let mut visited = visited_map(graph, start)?;
    mark(&mut visited, start);

    let mut queue = VecDeque::from([start.clone()]);
    let mut order = Vec::with_capacity(visited.len());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            if mark(&mut visited, &neighbor) {
                queue.push_back(neighbor);
            }
        }
        order.push(current);
    }

    log::trace!("breadth-first from {} visited {} vertices", start, order.len());
    Ok(order)
}

/// Run the traversal selected by `order`.
pub fn traverse<G: Graph + ?Sized>(
    graph: &G,
    start: &G::Vertex,
    order: TraversalOrder,
) -> GraphResult<Vec<G::Vertex>> {
    match order {
        TraversalOrder::DepthFirst => depth_first(graph, start),
        TraversalOrder::BreadthFirst => breadth_first(graph, start),
    }
}
