//! Renderer configuration, resolved from CLI flags, environment, and defaults.

use serde::{Deserialize, Serialize};

/// Environment variable naming the Graphviz binary.
pub const DOT_BINARY_ENV: &str = "DUALGRAPH_DOT";

/// Settings for [`render`](super::render).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output format passed to Graphviz as `-T<format>`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Graphviz executable.
    #[serde(default = "default_dot_binary")]
    pub dot_binary: String,
    /// Emit a `strict` graph so parallel edges collapse.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_format() -> String {
    "png".to_string()
}

fn default_dot_binary() -> String {
    "dot".to_string()
}

fn default_strict() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            dot_binary: default_dot_binary(),
            strict: default_strict(),
        }
    }
}

impl RenderConfig {
    /// Resolve settings. Explicit values win over the environment, which wins
    /// over defaults.
    pub fn resolve(format: Option<&str>, dot_binary: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(format) = format {
            config.format = format.to_string();
        }
        config.dot_binary = resolve_dot_binary(dot_binary);
        config
    }
}

/// Resolve the Graphviz binary using priority order:
/// 1. Explicit value (CLI arg)
/// 2. DUALGRAPH_DOT environment variable
/// 3. `dot` on the PATH
pub fn resolve_dot_binary(explicit: Option<&str>) -> String {
    if let Some(bin) = explicit {
        return bin.to_string();
    }
    match std::env::var(DOT_BINARY_ENV) {
        Ok(bin) if !bin.is_empty() => bin,
        _ => default_dot_binary(),
    }
}
