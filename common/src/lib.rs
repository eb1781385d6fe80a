//! XTM Filter Template Common Library
//!
//! テンプレートカタログ・絞り込み・判定ウィザードのコア（I/O・描画なし）

pub mod types;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod rules;
pub mod wizard;
pub mod hierarchy;
pub mod diagram;
pub mod export;

pub use types::{RawTemplate, TemplateRecord, UNCATEGORIZED};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{filter, CategoryFilter, FilterQuery};
pub use rules::{Answer, RuleEntry, RuleTable};
pub use wizard::{missing_references, resolve, MissingReference, ResolvedItem};
pub use hierarchy::{aggregate, CategoryAggregate, CategoryGroup};
pub use diagram::{FlowEdge, FlowGraph, FlowNode, NodeKind};
