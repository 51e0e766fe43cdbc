//! Cycle detection: breadth-first reachability with parent tracking.
//!
//! An edge `s -> v` found while expanding `s` closes a cycle when `v` was
//! already visited and `s` is not the vertex that discovered `v`. In an
//! undirected graph the edge from `s` back to its own discoverer is the tree
//! edge seen from the other side and is skipped as well.
//!
//! A single search only sees the component containing its start vertex.
//! [`has_cycle`] covers the whole graph by searching from every vertex not
//! reached by an earlier search; edges into an earlier search's vertices are
//! not cycle evidence.
//!
//! On directed graphs the search flags any edge into an already-visited,
//! non-parent vertex, so two paths that reconverge (a -> b -> c, a -> c)
//! are reported even without a directed cycle.

use std::collections::{HashMap, VecDeque};

use crate::types::GraphResult;

use super::traversal::{mark, visited_map};
use super::Graph;

/// Find an edge closing a cycle reachable from `start`, if any.
///
/// Returns the offending edge `(s, v)` where `s` was being expanded.
pub fn find_cycle_edge_from<G: Graph + ?Sized>(
    graph: &G,
    start: &G::Vertex,
) -> GraphResult<Option<(G::Vertex, G::Vertex)>> {
    let mut visited = visited_map(graph, start)?;
    search_from(graph, start, &mut visited)
}

/// True if a cycle is reachable from `start`.
pub fn has_cycle_from<G: Graph + ?Sized>(graph: &G, start: &G::Vertex) -> GraphResult<bool> {
    Ok(find_cycle_edge_from(graph, start)?.is_some())
}

/// True if any component of the graph contains a cycle.
///
/// Each search ignores edges into vertices covered by an earlier search, so
/// the result is true only if some single search finds a cycle.
pub fn has_cycle<G: Graph + ?Sized>(graph: &G) -> GraphResult<bool> {
    let vertices = graph.vertices();
    let mut visited: HashMap<G::Vertex, bool> =
        vertices.iter().map(|v| (v.clone(), false)).collect();

    for v in &vertices {
        if visited.get(v).copied().unwrap_or(true) {
            continue;
        }
        if let Some((s, t)) = search_from(graph, v, &mut visited)? {
            log::debug!("cycle found through edge {} -> {}", s, t);
            return Ok(true);
        }
    }
    Ok(false)
}

fn search_from<G: Graph + ?Sized>(
    graph: &G,
    start: &G::Vertex,
    visited: &mut HashMap<G::Vertex, bool>,
) -> GraphResult<Option<(G::Vertex, G::Vertex)>> {
    let directed = graph.is_directed();
    let mut parents: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    mark(visited, start);
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            if mark(visited, &neighbor) {
                parents.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor);
                continue;
            }
            // Covered by an earlier search, not part of this search tree.
            if neighbor != *start && !parents.contains_key(&neighbor) {
                continue;
            }
            let discovered_by_current = parents.get(&neighbor) == Some(&current);
            // Undirected: the edge back to the discoverer is the tree edge itself.
            let is_tree_edge_back =
                !directed && parents.get(&current) == Some(&neighbor);
            if !discovered_by_current && !is_tree_edge_back {
                log::trace!("cycle search from {}: cross edge {} -> {}", start, current, neighbor);
                return Ok(Some((current, neighbor)));
            }
        }
    }

    log::trace!("cycle search from {}: no cycle", start);
    Ok(None)
}
