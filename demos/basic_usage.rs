//! Basic usage: build the sample graph in both representations, walk it,
//! then mutate it and print the DOT source.
//!
//! Run with: cargo run --example basic_usage

use dualgraph::{
    breadth_first, depth_first, has_cycle_from, to_dot, Graph, GraphResult, ListGraph, MatrixGraph,
};

fn main() -> GraphResult<()> {
    let edges = [
        ("a", "b"),
        ("a", "d"),
        ("a", "c"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
        ("c", "e"),
        ("d", "e"),
    ];

    let mut list = ListGraph::undirected();
    let mut matrix = MatrixGraph::undirected();
    for v in ["a", "b", "c", "d", "e"] {
        list.add_vertex(v)?;
        matrix.add_vertex(v)?;
    }
    for (u, v) in &edges {
        list.add_edge(u, v)?;
        matrix.add_weighted_edge(u, v, 2.0)?;
    }

    println!("list   dfs: {:?}", depth_first(&list, &"a")?);
    println!("list   bfs: {:?}", breadth_first(&list, &"a")?);
    println!("matrix dfs: {:?}", depth_first(&matrix, &"a")?);
    println!("matrix bfs: {:?}", breadth_first(&matrix, &"a")?);
    println!("cycle from a: {}", has_cycle_from(&list, &"a")?);

    list.remove_edge(&"c", &"e")?;
    matrix.remove_edge(&"c", &"e")?;
    list.remove_vertex(&"a")?;
    matrix.remove_vertex(&"a")?;
    println!("after removals: {:?}", list.vertices());

    print!("{}", to_dot(&matrix, true)?);
    Ok(())
}
