//! DOT text emission.

use std::collections::HashSet;
use std::io::Write;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Write `graph` as Graphviz DOT.
///
/// One node statement per vertex, in enumeration order, then the edges.
/// Undirected graphs emit each unordered pair once with `--`; directed
/// graphs emit every ordered pair with `->`. Weighted graphs label each edge
/// with the weight.
pub fn write_dot<G: Graph + ?Sized, W: Write>(
    graph: &G,
    strict: bool,
    out: &mut W,
) -> GraphResult<()> {
    let (kind, arrow) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    if strict {
        writeln!(out, "strict {kind} {{")?;
    } else {
        writeln!(out, "{kind} {{")?;
    }

    let vertices = graph.vertices();
    for v in &vertices {
        writeln!(out, "\t{};", quote(v))?;
    }

    let mut emitted: HashSet<(G::Vertex, G::Vertex)> = HashSet::new();
    for v in &vertices {
        for (n, weight) in graph.weighted_neighbors(v)? {
            if !graph.is_directed() {
                if emitted.contains(&(v.clone(), n.clone())) {
                    continue;
                }
                emitted.insert((n.clone(), v.clone()));
                emitted.insert((v.clone(), n.clone()));
            }
            if graph.is_weighted() {
                writeln!(
                    out,
                    "\t{} {arrow} {} [label={}];",
                    quote(v),
                    quote(&n),
                    quote(&weight)
                )?;
            } else {
                writeln!(out, "\t{} {arrow} {};", quote(v), quote(&n))?;
            }
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}

/// DOT text for `graph` as a string.
pub fn to_dot<G: Graph + ?Sized>(graph: &G, strict: bool) -> GraphResult<String> {
    let mut buf = Vec::new();
    write_dot(graph, strict, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn quote(value: &impl std::fmt::Display) -> String {
    let text = value.to_string();
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
