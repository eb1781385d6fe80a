//! フロー図の描画（Graphviz DOT / Mermaid / JSON）

use crate::cli::DiagramFormat;
use crate::error::Result;
use xtm_template_common::FlowGraph;

pub fn render(graph: &FlowGraph, format: DiagramFormat) -> Result<String> {
    match format {
        DiagramFormat::Dot => Ok(render_dot(graph)),
        DiagramFormat::Mermaid => Ok(render_mermaid(graph)),
        DiagramFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
    }
}

/// 有向・上から下の階層レイアウト
pub fn render_dot(graph: &FlowGraph) -> String {
    let mut out = String::from("digraph filter_templates {\n");
    out.push_str("    rankdir=TB;\n");
    out.push_str("    node [shape=box, style=rounded];\n");

    for node in &graph.nodes {
        out.push_str(&format!(
            "    \"{}\" [label=\"{}\", fontsize={}];\n",
            escape_dot(&node.id),
            escape_dot(&node.label),
            node.size
        ));
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape_dot(&edge.source),
            escape_dot(&edge.target)
        ));
    }

    out.push_str("}\n");
    out
}

/// Mermaidは識別子に記号を使えないため連番IDを振る
pub fn render_mermaid(graph: &FlowGraph) -> String {
    let mut out = String::from("flowchart TD\n");

    let id_of = |id: &str| {
        graph
            .nodes
            .iter()
            .position(|n| n.id == id)
            .map(|i| format!("n{}", i))
    };

    for (i, node) in graph.nodes.iter().enumerate() {
        out.push_str(&format!("    n{}[\"{}\"]\n", i, escape_mermaid(&node.label)));
    }

    for edge in &graph.edges {
        if let (Some(source), Some(target)) = (id_of(&edge.source), id_of(&edge.target)) {
            out.push_str(&format!("    {} --> {}\n", source, target));
        }
    }

    out
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_mermaid(s: &str) -> String {
    s.replace('"', "#quot;")
}
