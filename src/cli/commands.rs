//! CLI command implementations.

use std::path::Path;

use crate::graph::{
    breadth_first, depth_first, find_cycle_edge_from, has_cycle, traverse, Graph, GraphBuilder,
    TraversalOrder,
};
use crate::render::{render, to_dot, RenderConfig};
use crate::types::{Directedness, GraphResult};

use super::input::{GraphSpec, Representation};

/// The five-vertex sample graph: a..e with edges a-b, a-d, a-c, b-c, b-d,
/// c-d, c-e, d-e, added in that order.
pub fn sample_builder() -> GraphBuilder<String> {
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
    let mut builder = GraphBuilder::new(Directedness::Undirected)
        .vertices(["a", "b", "c", "d", "e"].map(String::from));
    for (from, to) in edges {
        builder = builder.edge(from.to_string(), to.to_string());
    }
    builder
}

/// Build the sample graph in both representations and print both traversals.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let start = "a".to_string();
    let list = sample_builder().build_list()?;
    let matrix = sample_builder().build_matrix()?;

    let rows = [
        (
            Representation::List,
            depth_first(&list, &start)?,
            breadth_first(&list, &start)?,
        ),
        (
            Representation::Matrix,
            depth_first(&matrix, &start)?,
            breadth_first(&matrix, &start)?,
        ),
    ];

    if json {
        let out: Vec<serde_json::Value> = rows
            .iter()
            .map(|(repr, dfs, bfs)| {
                serde_json::json!({
                    "representation": repr.name(),
                    "start": start,
                    "dfs": dfs,
                    "bfs": bfs,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Vertices: {}", list.vertices().join(", "));
        println!("Edges: {}", list.edge_count());
        for (repr, dfs, bfs) in &rows {
            println!("{} representation, from {}:", repr.name(), start);
            println!("  dfs: {}", dfs.join(" "));
            println!("  bfs: {}", bfs.join(" "));
        }
    }
    Ok(())
}

/// Print each vertex with its neighbors (and weights).
pub fn cmd_neighbors(spec: &GraphSpec, vertex: Option<&str>, json: bool) -> GraphResult<()> {
    let graph = spec.build()?;
    let targets = match vertex {
        Some(v) => vec![v.to_string()],
        None => graph.vertices(),
    };

    let mut rows = Vec::with_capacity(targets.len());
    for v in targets {
        let neighbors = graph.weighted_neighbors(&v)?;
        rows.push((v, neighbors));
    }

    if json {
        let out: Vec<serde_json::Value> = rows
            .iter()
            .map(|(v, ns)| {
                let ns: Vec<serde_json::Value> = ns
                    .iter()
                    .map(|(n, w)| serde_json::json!({"vertex": n, "weight": w}))
                    .collect();
                serde_json::json!({"vertex": v, "neighbors": ns})
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        for (v, ns) in &rows {
            let parts: Vec<String> = ns
                .iter()
                .map(|(n, w)| {
                    if graph.is_weighted() {
                        format!("{n}({w})")
                    } else {
                        n.clone()
                    }
                })
                .collect();
            println!("{}: {}", v, parts.join(" "));
        }
    }
    Ok(())
}

/// Run a traversal from `start`.
pub fn cmd_traverse(
    spec: &GraphSpec,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = spec.build()?;
    let visited = traverse(&*graph, &start.to_string(), order)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "order": order.name(),
                "visited": visited,
            })
        );
    } else {
        println!("{} from {}: {}", order.name(), start, visited.join(" "));
        println!(
            "Reached {} of {} vertices",
            visited.len(),
            graph.vertex_count()
        );
    }
    Ok(())
}

/// Check for a cycle from `start`, or across all components when absent.
pub fn cmd_cycle(spec: &GraphSpec, start: Option<&str>, json: bool) -> GraphResult<()> {
    let graph = spec.build()?;

    let (found, edge) = match start {
        Some(s) => {
            let edge = find_cycle_edge_from(&*graph, &s.to_string())?;
            (edge.is_some(), edge)
        }
        None => (has_cycle(&*graph)?, None),
    };

    if json {
        let closing = edge.map(|(from, to)| serde_json::json!({"from": from, "to": to}));
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "cycle": found,
                "closing_edge": closing,
            })
        );
    } else {
        let scope = match start {
            Some(s) => format!("reachable from {s}"),
            None => "in graph".to_string(),
        };
        if found {
            match edge {
                Some((from, to)) => println!("Cycle {scope} (closed by {from} -> {to})"),
                None => println!("Cycle {scope}"),
            }
        } else {
            println!("No cycle {scope}");
        }
    }
    Ok(())
}

/// Print the graph as DOT.
pub fn cmd_dot(spec: &GraphSpec, strict: bool) -> GraphResult<()> {
    let graph = spec.build()?;
    print!("{}", to_dot(&*graph, strict)?);
    Ok(())
}

/// Render the graph with Graphviz.
pub fn cmd_render(
    spec: &GraphSpec,
    output: &Path,
    config: &RenderConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = spec.build()?;
    let path = render(&*graph, output, config)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"output": path.display().to_string(), "format": config.format})
        );
    } else {
        println!("Rendered {}", path.display());
    }
    Ok(())
}
