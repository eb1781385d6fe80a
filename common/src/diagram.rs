//! フローダイアグラムのグラフモデル
//!
//! Content Type → カテゴリ → テンプレート の3階層を
//! ノード・エッジに展開する。描画は呼び出し側（DOT / Mermaid）。

use crate::hierarchy::CategoryAggregate;
use serde::Serialize;

pub const ROOT_ID: &str = "Content";
pub const ROOT_LABEL: &str = "Content Type";

pub const ROOT_SIZE: u32 = 25;
pub const CATEGORY_SIZE: u32 = 20;
pub const TEMPLATE_SIZE: u32 = 15;

/// ノードの階層
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Category,
    Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub size: u32,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
}

/// 有向・階層レイアウトのグラフ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// 集計結果から生成
    ///
    /// ノードIDは `category:` / `template:` で名前空間を分ける
    /// （カテゴリと同名のテンプレートがあっても衝突しない）。
    pub fn from_aggregate(aggregate: &CategoryAggregate) -> Self {
        let mut nodes = vec![FlowNode {
            id: ROOT_ID.to_string(),
            label: ROOT_LABEL.to_string(),
            size: ROOT_SIZE,
            kind: NodeKind::Root,
        }];
        let mut edges = Vec::new();

        // カテゴリを先に並べ、テンプレートはその後
        for group in aggregate.hierarchy() {
            let category_id = category_node_id(&group.category);
            nodes.push(FlowNode {
                id: category_id.clone(),
                label: group.category.clone(),
                size: CATEGORY_SIZE,
                kind: NodeKind::Category,
            });
            edges.push(FlowEdge {
                source: ROOT_ID.to_string(),
                target: category_id,
            });
        }

        for group in aggregate.hierarchy() {
            let category_id = category_node_id(&group.category);
            for name in &group.names {
                let template_id = template_node_id(&group.category, name);
                // 同一カテゴリ内の重複名は1ノードにまとめる
                if nodes.iter().any(|n| n.id == template_id) {
                    continue;
                }
                nodes.push(FlowNode {
                    id: template_id.clone(),
                    label: name.clone(),
                    size: TEMPLATE_SIZE,
                    kind: NodeKind::Template,
                });
                edges.push(FlowEdge {
                    source: category_id.clone(),
                    target: template_id,
                });
            }
        }

        Self { nodes, edges }
    }

    /// 指定した階層のノード
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }
}

fn category_node_id(category: &str) -> String {
    format!("category:{}", category)
}

fn template_node_id(category: &str, name: &str) -> String {
    format!("template:{}/{}", category, name)
}
