//! 検索語・カテゴリによる絞り込み

use crate::catalog::Catalog;
use crate::types::TemplateRecord;

/// カテゴリ選択肢の「すべて」
pub const ALL_CATEGORIES: &str = "All";

/// カテゴリ条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// 完全一致（大文字小文字区別）
    Only(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(CategoryFilter::from).unwrap_or_default()
    }
}

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterQuery {
    pub fn new(search_term: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    /// 1件が条件に一致するか
    pub fn matches(&self, record: &TemplateRecord) -> bool {
        self.matches_with(&self.search_term.to_lowercase(), record)
    }

    fn matches_with(&self, needle: &str, record: &TemplateRecord) -> bool {
        let text_hit = record.name.to_lowercase().contains(needle)
            || record.description.to_lowercase().contains(needle);

        let category_hit = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        };

        text_hit && category_hit
    }
}

/// カタログを絞り込む（元の並び順を保持、空の結果もエラーではない）
pub fn filter<'a>(catalog: &'a Catalog, query: &FilterQuery) -> Vec<&'a TemplateRecord> {
    let needle = query.search_term.to_lowercase();
    catalog
        .iter()
        .filter(|record| query.matches_with(&needle, record))
        .collect()
}
