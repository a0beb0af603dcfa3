//! Graphviz export of computation graphs.
//!
//! [`to_dot`] turns the graph under a node into DOT text. Rendering that text
//! to an image is delegated to an external Graphviz program through
//! [`DotRenderer`]; the crate itself never links against Graphviz.

use crate::autograd::graph::NodeId;
use crate::error::ScalarustError;
use crate::value::Value;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns the DOT description of every node reachable from `root`.
///
/// Nodes are named `n0, n1, …` in the order they are first discovered from
/// `root` (which is `n0`). Each box shows the optional label, `data`, `grad`
/// and, for derived nodes, `op`. There is one `dependency -> consumer` edge per
/// dependency occurrence, so `a + a` draws two edges from `a`.
pub fn to_dot(root: &Value) -> String {
    let mut out = String::new();
    out.push_str("digraph autograd {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=box];\n");

    let mut ids: HashMap<NodeId, usize> = HashMap::new();
    let mut stack = vec![root.clone()];
    ids.insert(root.node_id(), 0);

    while let Some(node) = stack.pop() {
        let Some(&id) = ids.get(&node.node_id()) else {
            continue;
        };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  n{} [label=\"{}\"];", id, node_label(&node));

        let dependencies = node.dependencies();
        let mut unseen = Vec::new();
        for dep in &dependencies {
            let next_id = ids.len();
            let dep_id = *ids.entry(dep.node_id()).or_insert_with(|| {
                unseen.push(dep.clone());
                next_id
            });
            let _ = writeln!(out, "  n{} -> n{};", dep_id, id);
        }
        // Reverse so the first operand is expanded first.
        stack.extend(unseen.into_iter().rev());
    }

    out.push_str("}\n");
    debug!("to_dot: {} nodes", ids.len());
    out
}

fn node_label(node: &Value) -> String {
    let vd = node.read_data();
    let mut label = String::new();
    if let Some(name) = &vd.label {
        label.push_str(&escape(name));
        label.push_str("\\n");
    }
    let _ = write!(label, "data={}\\ngrad={}", vd.data, vd.grad);
    if let Some(op) = vd.operation {
        let _ = write!(label, "\\nop={}", escape(op.name()));
    }
    label
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes [`to_dot`] of `root` to `path`.
pub fn write_dot_file(root: &Value, path: impl AsRef<Path>) -> Result<(), ScalarustError> {
    fs::write(path.as_ref(), to_dot(root))?;
    debug!("wrote DOT file {}", path.as_ref().display());
    Ok(())
}

/// Runs a Graphviz layout program on the DOT export of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotRenderer {
    /// Executable to run, looked up on `PATH` when not a path.
    pub program: PathBuf,
    /// Output format passed as `-T<format>`.
    pub format: String,
}

impl Default for DotRenderer {
    fn default() -> Self {
        DotRenderer {
            program: PathBuf::from("dot"),
            format: "png".to_string(),
        }
    }
}

impl DotRenderer {
    pub fn new(program: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        DotRenderer {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Writes the DOT file for `root` at `dot_path`, then renders it to `output_path`.
    ///
    /// The DOT file is kept. The graph is only read.
    ///
    /// # Errors
    /// * `Io` if the DOT file cannot be written.
    /// * `RenderFailed` if the program cannot be started or exits unsuccessfully.
    pub fn render(
        &self,
        root: &Value,
        output_path: impl AsRef<Path>,
        dot_path: impl AsRef<Path>,
    ) -> Result<(), ScalarustError> {
        let dot_path = dot_path.as_ref();
        let output_path = output_path.as_ref();
        write_dot_file(root, dot_path)?;

        let program = self.program.display().to_string();
        let output = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg(dot_path)
            .arg("-o")
            .arg(output_path)
            .output()
            .map_err(|e| {
                warn!("could not start '{}': {}", program, e);
                ScalarustError::RenderFailed {
                    program: program.clone(),
                    reason: e.to_string(),
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("'{}' exited with {}: {}", program, output.status, stderr);
            return Err(ScalarustError::RenderFailed {
                program,
                reason: format!("{} {}", output.status, stderr).trim().to_string(),
            });
        }
        debug!("rendered {}", output_path.display());
        Ok(())
    }
}

/// Renders `root` to a PNG with the default `dot` program.
pub fn write_png(
    root: &Value,
    output_path: impl AsRef<Path>,
    dot_path: impl AsRef<Path>,
) -> Result<(), ScalarustError> {
    DotRenderer::default().render(root, output_path, dot_path)
}

#[cfg(test)]
#[path = "viz_test.rs"]
mod tests;
