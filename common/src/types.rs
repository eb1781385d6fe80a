//! テンプレートレコードの型定義
//!
//! - RawTemplate: JSONから読み込んだままの形（任意フィールドはOption）
//! - TemplateRecord: 既定値を適用済みの正規化レコード

use serde::{Deserialize, Serialize};

/// カテゴリ未設定時の既定値
pub const UNCATEGORIZED: &str = "Uncategorized";

/// JSONの1要素（正規化前）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recommended_usage: Option<String>,
    #[serde(default)]
    pub suggested_use: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// フィルタテンプレート1件
///
/// JSONからは `RawTemplate` 経由でのみ作る（直接デシリアライズしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    pub name: String,
    pub description: String,
    pub recommended_usage: String,
    pub suggested_use: String,
    pub category: String,
}

impl Default for TemplateRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            recommended_usage: String::new(),
            suggested_use: String::new(),
            category: UNCATEGORIZED.to_string(),
        }
    }
}

impl From<RawTemplate> for TemplateRecord {
    /// 既定値の適用はここでだけ行う
    fn from(raw: RawTemplate) -> Self {
        let category = raw
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        Self {
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            recommended_usage: raw.recommended_usage.unwrap_or_default(),
            suggested_use: raw.suggested_use.unwrap_or_default(),
            category,
        }
    }
}

impl TemplateRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }
}
