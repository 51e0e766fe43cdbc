//! Graphviz export: DOT text and the external `dot` renderer.

pub mod config;
pub mod dot;

pub use config::{RenderConfig, DOT_BINARY_ENV};
pub use dot::{to_dot, write_dot};

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Render `graph` to an image next to `name`.
///
/// Writes `<name>.dot`, then runs the configured Graphviz binary to produce
/// `<name>.<format>`. The extensions are appended to the full name, so a
/// dotted name such as `report.v2` is kept intact. Returns the image path.
/// Nothing is read back.
pub fn render<G: Graph + ?Sized>(
    graph: &G,
    name: &Path,
    config: &RenderConfig,
) -> GraphResult<PathBuf> {
    let dot_path = append_extension(name, "dot");
    let out_path = append_extension(name, &config.format);

    let file = std::fs::File::create(&dot_path)?;
    let mut writer = BufWriter::new(file);
    write_dot(graph, config.strict, &mut writer)?;
    writer.flush()?;

    log::info!(
        "rendering {} with {} -T{}",
        dot_path.display(),
        config.dot_binary,
        config.format
    );
    let output = Command::new(&config.dot_binary)
        .arg(format!("-T{}", config.format))
        .arg("-o")
        .arg(&out_path)
        .arg(&dot_path)
        .output()
        .map_err(|e| GraphError::Render(format!("failed to run {}: {e}", config.dot_binary)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::warn!("{} exited with {}: {}", config.dot_binary, output.status, stderr.trim());
        return Err(GraphError::Render(format!(
            "{} exited with {}",
            config.dot_binary, output.status
        )));
    }

    Ok(out_path)
}

fn append_extension(name: &Path, ext: &str) -> PathBuf {
    let mut file_name = name.as_os_str().to_os_string();
    file_name.push(".");
    file_name.push(ext);
    PathBuf::from(file_name)
}
