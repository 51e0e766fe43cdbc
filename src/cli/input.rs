//! Parsing of inline graph descriptions (`--vertices a,b --edges a-b:2`).

use crate::graph::{Graph, GraphBuilder};
use crate::types::{Directedness, GraphError, GraphResult, Weight};

/// Which backing representation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// Adjacency list.
    #[default]
    List,
    /// Adjacency matrix.
    Matrix,
}

impl Representation {
    /// Return a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        }
    }

    /// Parse a representation from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" | "adjacency_list" => Some(Self::List),
            "matrix" | "adjacency_matrix" => Some(Self::Matrix),
            _ => None,
        }
    }
}

/// A graph described on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSpec {
    pub representation: Representation,
    pub directedness: Directedness,
    pub vertices: Vec<String>,
    /// `(from, to, weight)`; no weight means the default.
    pub edges: Vec<(String, String, Option<Weight>)>,
}

impl GraphSpec {
    /// Parse comma-separated vertex and edge lists.
    ///
    /// Edges are written `from-to` or `from-to:weight`, so vertex names may
    /// not contain `-` or `:`.
    pub fn parse(
        representation: Representation,
        directedness: Directedness,
        vertices: &str,
        edges: &str,
    ) -> GraphResult<Self> {
        let vertices = split_list(vertices).map(str::to_string).collect();
        let edges = split_list(edges)
            .map(parse_edge)
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(Self {
            representation,
            directedness,
            vertices,
            edges,
        })
    }

    /// Builder holding the described vertices and edges.
    pub fn builder(&self) -> GraphBuilder<String> {
        let mut builder = GraphBuilder::new(self.directedness).vertices(self.vertices.clone());
        for (from, to, weight) in &self.edges {
            builder = match weight {
                Some(w) => builder.weighted_edge(from.clone(), to.clone(), *w),
                None => builder.edge(from.clone(), to.clone()),
            };
        }
        builder
    }

    /// Build the described graph in the chosen representation.
    pub fn build(&self) -> GraphResult<Box<dyn Graph<Vertex = String>>> {
        let builder = self.builder();
        let graph: Box<dyn Graph<Vertex = String>> = match self.representation {
            Representation::List => Box::new(builder.build_list()?),
            Representation::Matrix => Box::new(builder.build_matrix()?),
        };
        Ok(graph)
    }
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn parse_edge(token: &str) -> GraphResult<(String, String, Option<Weight>)> {
    let (pair, weight) = match token.split_once(':') {
        Some((pair, w)) => {
            let w: Weight = w
                .trim()
                .parse()
                .map_err(|_| GraphError::InvalidInput(format!("bad weight in edge '{token}'")))?;
            (pair, Some(w))
        }
        None => (token, None),
    };
    let (from, to) = pair
        .split_once('-')
        .ok_or_else(|| GraphError::InvalidInput(format!("edge '{token}' is not from-to")))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(GraphError::InvalidInput(format!(
            "edge '{token}' has an empty endpoint"
        )));
    }
    Ok((from.to_string(), to.to_string(), weight))
}
