//! CLI entry point for the `dualgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use dualgraph::cli::{commands, GraphSpec, Representation};
use dualgraph::graph::TraversalOrder;
use dualgraph::render::RenderConfig;
use dualgraph::types::{Directedness, GraphError, GraphResult};

#[derive(Parser)]
#[command(
    name = "dualgraph",
    about = "dualgraph CLI — adjacency-list and adjacency-matrix graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Inline graph description shared by every graph command.
#[derive(Args)]
struct GraphArgs {
    /// Representation: list or matrix
    #[arg(long, default_value = "list")]
    repr: String,
    /// Build a directed graph
    #[arg(long)]
    directed: bool,
    /// Comma-separated vertex names
    #[arg(long, default_value = "")]
    vertices: String,
    /// Comma-separated edges: from-to or from-to:weight
    #[arg(long, default_value = "")]
    edges: String,
}

impl GraphArgs {
    fn spec(&self) -> GraphResult<GraphSpec> {
        let repr = Representation::from_name(&self.repr)
            .ok_or_else(|| GraphError::InvalidInput(format!("unknown representation: {}", self.repr)))?;
        GraphSpec::parse(
            repr,
            Directedness::from_directed(self.directed),
            &self.vertices,
            &self.edges,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the five-vertex sample graph and print both traversals
    Demo,
    /// List neighbors of one vertex, or of every vertex
    Neighbors {
        #[command(flatten)]
        graph: GraphArgs,
        /// Only this vertex
        #[arg(long)]
        vertex: Option<String>,
    },
    /// Depth-first or breadth-first traversal from a start vertex
    Traverse {
        #[command(flatten)]
        graph: GraphArgs,
        /// Start vertex
        #[arg(long)]
        start: String,
        /// Order: dfs or bfs
        #[arg(long, default_value = "dfs")]
        order: String,
    },
    /// Check for a cycle from a start vertex, or across the whole graph
    Cycle {
        #[command(flatten)]
        graph: GraphArgs,
        /// Start vertex (omit to check every component)
        #[arg(long)]
        start: Option<String>,
    },
    /// Print the graph in Graphviz DOT format
    Dot {
        #[command(flatten)]
        graph: GraphArgs,
        /// Allow parallel edges in the output
        #[arg(long)]
        non_strict: bool,
    },
    /// Render the graph to an image with Graphviz
    Render {
        #[command(flatten)]
        graph: GraphArgs,
        /// Output name; `.dot` and the --image-format extension are appended
        #[arg(long, default_value = "export_graph")]
        output: PathBuf,
        /// Graphviz output format
        #[arg(long)]
        image_format: Option<String>,
        /// Graphviz binary (defaults to $DUALGRAPH_DOT, then `dot`)
        #[arg(long)]
        dot: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Neighbors { graph, vertex } => graph
            .spec()
            .and_then(|spec| commands::cmd_neighbors(&spec, vertex.as_deref(), json)),
        Commands::Traverse {
            graph,
            start,
            order,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(o) => o,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            graph
                .spec()
                .and_then(|spec| commands::cmd_traverse(&spec, &start, order, json))
        }
        Commands::Cycle { graph, start } => graph
            .spec()
            .and_then(|spec| commands::cmd_cycle(&spec, start.as_deref(), json)),
        Commands::Dot { graph, non_strict } => graph
            .spec()
            .and_then(|spec| commands::cmd_dot(&spec, !non_strict)),
        Commands::Render {
            graph,
            output,
            image_format,
            dot,
        } => {
            let config = RenderConfig::resolve(image_format.as_deref(), dot.as_deref());
            graph
                .spec()
                .and_then(|spec| commands::cmd_render(&spec, &output, &config, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Render(_) => 2,
            GraphError::InvalidInput(_) => 3,
            GraphError::DuplicateVertex(_)
            | GraphError::UnknownVertex(_)
            | GraphError::EdgeNotFound { .. }
            | GraphError::IndexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
