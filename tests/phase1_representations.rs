//! Phase 1 tests: adjacency-list and adjacency-matrix mutation and queries.

use dualgraph::graph::{Graph, GraphBuilder, ListGraph, MatrixGraph};
use dualgraph::types::{Directedness, GraphError, NO_EDGE};

// ==================== Helpers ====================

fn abc<G: Graph<Vertex = &'static str>>(mut g: G) -> G {
    for v in ["a", "b", "c"] {
        g.add_vertex(v).unwrap();
    }
    g
}

fn sorted(mut v: Vec<&'static str>) -> Vec<&'static str> {
    v.sort_unstable();
    v
}

/// Every contract check that must hold for either representation.
fn check_basic_contract<G: Graph<Vertex = &'static str>>(mut g: G) {
    g.add_vertex("x").unwrap();
    match g.add_vertex("x") {
        Err(GraphError::DuplicateVertex(v)) => assert_eq!(v, "x"),
        other => panic!("Expected DuplicateVertex, got {:?}", other),
    }

    assert!(matches!(g.neighbors(&"z"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(g.adjacent(&"x", &"z"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(g.adjacent(&"z", &"x"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(g.add_edge(&"x", &"z"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(g.remove_vertex(&"z"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(g.remove_edge(&"z", &"x"), Err(GraphError::UnknownVertex(_))));

    // Failed calls leave the graph untouched.
    assert_eq!(g.vertices(), vec!["x"]);
    assert!(g.neighbors(&"x").unwrap().is_empty());
}

// ==================== Shared contract ====================

#[test]
fn test_list_basic_contract() {
    check_basic_contract(ListGraph::undirected());
    check_basic_contract(ListGraph::directed());
}

#[test]
fn test_matrix_basic_contract() {
    check_basic_contract(MatrixGraph::undirected());
    check_basic_contract(MatrixGraph::directed());
}

#[test]
fn test_vertices_in_insertion_order() {
    let list = abc(ListGraph::undirected());
    let matrix = abc(MatrixGraph::undirected());
    assert_eq!(list.vertices(), vec!["a", "b", "c"]);
    assert_eq!(matrix.vertices(), vec!["a", "b", "c"]);
    assert_eq!(list.vertices(), list.vertices());
}

#[test]
fn test_undirected_symmetry() {
    let mut list = abc(ListGraph::undirected());
    let mut matrix = abc(MatrixGraph::undirected());
    list.add_edge(&"a", &"b").unwrap();
    matrix.add_edge(&"a", &"b").unwrap();

    for (u, v) in [("a", "b"), ("a", "c"), ("b", "c")] {
        assert_eq!(list.adjacent(&u, &v).unwrap(), list.adjacent(&v, &u).unwrap());
        assert_eq!(matrix.adjacent(&u, &v).unwrap(), matrix.adjacent(&v, &u).unwrap());
    }
    assert!(list.adjacent(&"b", &"a").unwrap());
    assert!(matrix.adjacent(&"b", &"a").unwrap());
}

#[test]
fn test_directed_edges_are_one_way() {
    let mut list = abc(ListGraph::directed());
    let mut matrix = abc(MatrixGraph::directed());
    list.add_edge(&"a", &"b").unwrap();
    matrix.add_edge(&"a", &"b").unwrap();

    assert!(list.adjacent(&"a", &"b").unwrap());
    assert!(!list.adjacent(&"b", &"a").unwrap());
    assert!(matrix.adjacent(&"a", &"b").unwrap());
    assert!(!matrix.adjacent(&"b", &"a").unwrap());
    assert_eq!(list.edge_count(), 1);
    assert_eq!(matrix.edge_count(), 1);
}

#[test]
fn test_remove_vertex_cascades() {
    let builder = GraphBuilder::new(Directedness::Directed)
        .vertices(["a", "b", "c"])
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "b")
        .edge("b", "b");
    let mut list = builder.clone().build_list().unwrap();
    let mut matrix = builder.build_matrix().unwrap();

    list.remove_vertex(&"b").unwrap();
    matrix.remove_vertex(&"b").unwrap();

    let graphs: [&dyn Graph<Vertex = &str>; 2] = [&list, &matrix];
    for g in graphs {
        assert_eq!(g.vertices(), vec!["a", "c"]);
        for v in g.vertices() {
            assert!(!g.neighbors(&v).unwrap().contains(&"b"));
        }
        assert!(matches!(g.neighbors(&"b"), Err(GraphError::UnknownVertex(_))));
        assert_eq!(g.edge_count(), 0);
    }
}

// ==================== ListGraph ====================

#[test]
fn test_list_duplicate_edges_kept() {
    let mut g = abc(ListGraph::undirected());
    g.add_edge(&"a", &"b").unwrap();
    g.add_edge(&"a", &"b").unwrap();
    assert_eq!(g.neighbors(&"a").unwrap(), vec!["b", "b"]);
    assert_eq!(g.neighbors(&"b").unwrap(), vec!["a", "a"]);
    assert_eq!(g.edge_count(), 2);

    g.remove_edge(&"a", &"b").unwrap();
    assert_eq!(g.neighbors(&"a").unwrap(), vec!["b"]);
    assert_eq!(g.neighbors(&"b").unwrap(), vec!["a"]);
    assert!(g.adjacent(&"a", &"b").unwrap());
}

#[test]
fn test_list_remove_missing_edge() {
    let mut g = abc(ListGraph::undirected());
    match g.remove_edge(&"a", &"c") {
        Err(GraphError::EdgeNotFound { from, to }) => {
            assert_eq!(from, "a");
            assert_eq!(to, "c");
        }
        other => panic!("Expected EdgeNotFound, got {:?}", other),
    }
}

#[test]
fn test_list_neighbors_is_snapshot() {
    let mut g = abc(ListGraph::undirected());
    g.add_edge(&"a", &"b").unwrap();
    let before = g.neighbors(&"a").unwrap();
    g.add_edge(&"a", &"c").unwrap();
    assert_eq!(before, vec!["b"]);
    assert_eq!(g.neighbors(&"a").unwrap(), vec!["b", "c"]);
}

#[test]
fn test_list_directed_remove_edge_leaves_reverse() {
    let mut g = abc(ListGraph::directed());
    g.add_edge(&"a", &"b").unwrap();
    g.add_edge(&"b", &"a").unwrap();
    g.remove_edge(&"a", &"b").unwrap();
    assert!(!g.adjacent(&"a", &"b").unwrap());
    assert!(g.adjacent(&"b", &"a").unwrap());
}

// ==================== MatrixGraph ====================

#[test]
fn test_matrix_weights_overwrite() {
    let mut g = abc(MatrixGraph::undirected());
    g.add_weighted_edge(&"a", &"c", 12.0).unwrap();
    g.add_weighted_edge(&"a", &"c", 12.0).unwrap();
    g.add_weighted_edge(&"a", &"c", 3.5).unwrap();
    assert_eq!(g.edge_weight(&"a", &"c").unwrap(), 3.5);
    assert_eq!(g.edge_weight(&"c", &"a").unwrap(), 3.5);
    assert_eq!(g.edge_weight(&"a", &"b").unwrap(), NO_EDGE);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_matrix_default_weight_is_one() {
    let mut g = abc(MatrixGraph::directed());
    g.add_edge(&"b", &"c").unwrap();
    assert_eq!(g.edge_weight(&"b", &"c").unwrap(), 1.0);
    assert_eq!(g.weighted_neighbors(&"b").unwrap(), vec![("c", 1.0)]);
}

#[test]
fn test_matrix_remove_missing_edge_is_noop() {
    let mut g = abc(MatrixGraph::undirected());
    g.add_edge(&"a", &"b").unwrap();
    g.remove_edge(&"a", &"c").unwrap();
    g.remove_edge(&"b", &"a").unwrap();
    assert!(!g.adjacent(&"a", &"b").unwrap());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_matrix_unknown_vertex_on_weight_lookup() {
    let g = abc(MatrixGraph::undirected());
    assert!(matches!(g.edge_weight(&"a", &"z"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(g.index_of(&"z"), Err(GraphError::UnknownVertex(_))));
}

#[test]
fn test_matrix_neighbors_in_position_order() {
    let mut g = MatrixGraph::undirected();
    for v in ["a", "b", "c", "d"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&"a", &"d").unwrap();
    g.add_edge(&"a", &"b").unwrap();
    g.add_edge(&"a", &"c").unwrap();
    assert_eq!(g.neighbors(&"a").unwrap(), vec!["b", "c", "d"]);
}

#[test]
fn test_matrix_reindexing_preserves_neighbors() {
    let builder = GraphBuilder::new(Directedness::Directed)
        .vertices(["a", "b", "c", "d", "e"])
        .weighted_edge("a", "c", 2.0)
        .weighted_edge("c", "e", 3.0)
        .weighted_edge("e", "a", 4.0)
        .weighted_edge("d", "c", 5.0)
        .edge("b", "d")
        .edge("a", "b");
    let mut g = builder.build_matrix().unwrap();

    g.remove_vertex(&"b").unwrap();

    assert_eq!(g.vertices(), vec!["a", "c", "d", "e"]);
    assert_eq!(g.weighted_neighbors(&"a").unwrap(), vec![("c", 2.0)]);
    assert_eq!(g.weighted_neighbors(&"c").unwrap(), vec![("e", 3.0)]);
    assert_eq!(g.weighted_neighbors(&"d").unwrap(), vec![("c", 5.0)]);
    assert_eq!(g.weighted_neighbors(&"e").unwrap(), vec![("a", 4.0)]);
    assert_eq!(g.index_of(&"e").unwrap(), 3);
    assert_eq!(g.matrix().len(), 4);
}

// ==================== Builder ====================

#[test]
fn test_builder_surfaces_errors() {
    let dup = GraphBuilder::new(Directedness::Undirected)
        .vertex("a")
        .vertex("a")
        .build_list();
    assert!(matches!(dup, Err(GraphError::DuplicateVertex(_))));

    let unknown = GraphBuilder::new(Directedness::Undirected)
        .vertex("a")
        .edge("a", "q")
        .build_matrix();
    assert!(matches!(unknown, Err(GraphError::UnknownVertex(v)) if v == "q"));
}

#[test]
fn test_builder_list_ignores_weights() {
    let g = GraphBuilder::new(Directedness::Undirected)
        .vertices(["a", "b"])
        .weighted_edge("a", "b", 7.0)
        .build_list()
        .unwrap();
    assert_eq!(g.weighted_neighbors(&"a").unwrap(), vec![("b", 1.0)]);
    assert!(!g.is_weighted());
    assert_eq!(sorted(g.neighbors(&"b").unwrap()), vec!["a"]);
}
