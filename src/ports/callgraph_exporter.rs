//! Call Graph DOT Exporter
//!
//! Exports a CallGraph as Graphviz DOT. Declared methods render as filled
//! boxes; callee names that never appear as declared methods render with the
//! default style, as external leaves.

use crate::domain::callgraph::CallGraph;
use std::io::Result;

pub struct CallGraphExporter;

impl CallGraphExporter {
    /// Export a CallGraph to a DOT file.
    pub fn export(graph: &CallGraph, path: &str) -> Result<()> {
        let content = Self::to_dot(graph);
        std::fs::write(path, content)
    }

    /// Convert a CallGraph to a DOT string.
    pub fn to_dot(graph: &CallGraph) -> String {
        let mut lines = Vec::new();

        lines.push("digraph CallGraph {".to_string());
        lines.push("    rankdir=TB;".to_string());
        lines.push("    node [fontname=\"Helvetica\", fontsize=12];".to_string());
        lines.push("    edge [fontname=\"Helvetica\", fontsize=10];".to_string());
        lines.push(String::new());

        for node in &graph.nodes {
            lines.push(format!(
                "    \"{}\" [shape=box, style=filled, fillcolor=\"#89b4fa\"];",
                Self::escape_label(&node.id)
            ));
        }

        lines.push(String::new());

        for node in &graph.nodes {
            for callee in &node.callees {
                lines.push(format!(
                    "    \"{}\" -> \"{}\";",
                    Self::escape_label(&node.id),
                    Self::escape_label(callee)
                ));
            }
        }

        lines.push("}".to_string());
        lines.join("\n")
    }

    fn escape_label(label: &str) -> String {
        label
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    }
}
