//! 判定ウィザードの照合
//!
//! ルール表の推奨名をカタログと突き合わせる。
//! ルール表とカタログは別々に保守されるため、名前が見つからないのは想定内の結果。

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::rules::RuleTable;
use crate::types::TemplateRecord;

/// 推奨名1件の照合結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedItem<'a> {
    /// カタログに存在
    Found(&'a TemplateRecord),
    /// カタログに存在しない名前
    Missing(String),
}

impl ResolvedItem<'_> {
    pub fn name(&self) -> &str {
        match self {
            ResolvedItem::Found(record) => &record.name,
            ResolvedItem::Missing(name) => name,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedItem::Found(_))
    }
}

/// ファイル種別と回答から推奨テンプレートを解決
///
/// ファイル種別・回答がルール表にない場合は呼び出し側の誤りとしてエラーを返す。
/// 回答の候補はファイル種別ごとに異なるので、種別を選び直したら
/// `RuleEntry::answer_labels()` を取り直すこと。
pub fn resolve<'a>(
    catalog: &'a Catalog,
    rules: &RuleTable,
    file_type: &str,
    answer: &str,
) -> Result<Vec<ResolvedItem<'a>>> {
    let entry = rules.get(file_type).ok_or_else(|| {
        log::error!("resolve called with unknown file type '{}'", file_type);
        Error::UnknownFileType(file_type.to_string())
    })?;

    let answer_entry = entry.answer(answer).ok_or_else(|| {
        log::error!("resolve called with unknown answer '{}' for '{}'", answer, file_type);
        Error::UnknownAnswer {
            file_type: file_type.to_string(),
            answer: answer.to_string(),
        }
    })?;

    let items = answer_entry
        .templates
        .iter()
        .map(|name| match catalog.get(name) {
            Some(record) => ResolvedItem::Found(record),
            None => ResolvedItem::Missing(name.to_string()),
        })
        .collect();

    Ok(items)
}

/// カタログに存在しないルール表の参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    pub file_type: &'static str,
    pub answer: &'static str,
    pub name: &'static str,
}

/// ルール表全体の不一致一覧（定義順）
pub fn missing_references(catalog: &Catalog, rules: &RuleTable) -> Vec<MissingReference> {
    let mut missing = Vec::new();

    for entry in rules.entries() {
        for answer in entry.answers {
            for &name in answer.templates {
                if catalog.get(name).is_none() {
                    missing.push(MissingReference {
                        file_type: entry.file_type,
                        answer: answer.label,
                        name,
                    });
                }
            }
        }
    }

    missing
}
