//! カテゴリ集計モジュール
//!
//! カタログを1回走査して、カテゴリ別件数（チャート用）と
//! カテゴリ→テンプレート名の2階層（ダイアグラム用）を同時に作る。
//! 並び順は初出順のまま。表示用の並べ替えは呼び出し側で行う。

use crate::types::{TemplateRecord, UNCATEGORIZED};
use serde::Serialize;
use std::collections::HashMap;

/// 1カテゴリ分の集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// カテゴリ名
    pub category: String,
    /// 所属テンプレート名（カタログ順）
    pub names: Vec<String>,
}

impl CategoryGroup {
    /// 件数
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

/// カテゴリ集計全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    /// カテゴリ（初出順）
    groups: Vec<CategoryGroup>,
}

impl CategoryAggregate {
    /// カテゴリ→件数（初出順）
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .map(|g| (g.category.as_str(), g.count()))
            .collect()
    }

    /// カテゴリ→テンプレート名
    pub fn hierarchy(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// カテゴリで検索
    pub fn get(&self, category: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// 全件数
    pub fn total(&self) -> usize {
        self.groups.iter().map(CategoryGroup::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// カテゴリ別に集計（1パス）
pub fn aggregate<'a, I>(records: I) -> CategoryAggregate
where
    I: IntoIterator<Item = &'a TemplateRecord>,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let category = if record.category.is_empty() {
            UNCATEGORIZED
        } else {
            record.category.as_str()
        };

        let slot = match index.get(category) {
            Some(&slot) => slot,
            None => {
                groups.push(CategoryGroup {
                    category: category.to_string(),
                    names: Vec::new(),
                });
                index.insert(category.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };

        groups[slot].names.push(record.name.clone());
    }

    CategoryAggregate { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn two_record_catalog() -> Catalog {
        Catalog::new(vec![
            TemplateRecord::new("PPT w/o Notes", "PowerPoint"),
            TemplateRecord::new("Bilingual Excel", "Excel"),
        ])
    }

    #[test]
    fn test_aggregate_two_records() {
        let result = aggregate(&two_record_catalog());
        assert_eq!(result.counts(), vec![("PowerPoint", 1), ("Excel", 1)]);
        assert_eq!(
            result.hierarchy(),
            &[
                CategoryGroup {
                    category: "PowerPoint".into(),
                    names: vec!["PPT w/o Notes".into()],
                },
                CategoryGroup {
                    category: "Excel".into(),
                    names: vec!["Bilingual Excel".into()],
                },
            ]
        );
    }

    #[test]
    fn test_aggregate_keeps_first_seen_order() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("b1", "Word"),
            TemplateRecord::new("a1", "Excel"),
            TemplateRecord::new("b2", "Word"),
            TemplateRecord::new("c1", "XML"),
            TemplateRecord::new("a2", "Excel"),
        ]);
        let result = aggregate(&catalog);

        assert_eq!(result.counts(), vec![("Word", 2), ("Excel", 2), ("XML", 1)]);
        assert_eq!(result.get("Word").unwrap().names, vec!["b1", "b2"]);
        assert_eq!(result.get("Excel").unwrap().names, vec!["a1", "a2"]);
    }

    #[test]
    fn test_counts_sum_to_catalog_len() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("a", "Word"),
            TemplateRecord::new("b", "Excel"),
            TemplateRecord::new("c", "Word"),
            TemplateRecord::default(),
        ]);
        let result = aggregate(&catalog);

        assert_eq!(result.total(), catalog.len());
        for group in result.hierarchy() {
            let (_, count) = result
                .counts()
                .into_iter()
                .find(|(c, _)| *c == group.category)
                .unwrap();
            assert_eq!(count, group.names.len());
        }
        assert!(result.get(UNCATEGORIZED).is_some());
    }

    #[test]
    fn test_empty_category_falls_back() {
        let record = TemplateRecord {
            category: String::new(),
            ..TemplateRecord::new("x", "")
        };
        let result = aggregate([&record]);
        assert_eq!(result.counts(), vec![(UNCATEGORIZED, 1)]);
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate(&Catalog::default());
        assert!(result.is_empty());
        assert!(result.counts().is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let catalog = two_record_catalog();
        assert_eq!(aggregate(&catalog), aggregate(&catalog));
    }
}
