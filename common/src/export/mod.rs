//! Export core modules shared by the CLI.
//!
//! 列定義とレコードアクセスのトレイトをCSV・Excelで共有する。

pub mod csv_core;

#[cfg(feature = "excel")]
pub mod excel_core;

use crate::types::TemplateRecord;

/// 出力列の定義
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefinition {
    pub key: &'static str,
    pub header: &'static str,
}

/// Templates シート / CSV の列（JSONのキー順）
pub const TEMPLATE_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition { key: "name", header: "name" },
    ColumnDefinition { key: "description", header: "description" },
    ColumnDefinition { key: "recommended_usage", header: "recommended_usage" },
    ColumnDefinition { key: "suggested_use", header: "suggested_use" },
    ColumnDefinition { key: "category", header: "category" },
];

/// テンプレートデータのトレイト（所有・参照どちらのスライスにも対応）
pub trait TemplateData {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn recommended_usage(&self) -> &str;
    fn suggested_use(&self) -> &str;
    fn category(&self) -> &str;
}

impl TemplateData for TemplateRecord {
    fn name(&self) -> &str { &self.name }
    fn description(&self) -> &str { &self.description }
    fn recommended_usage(&self) -> &str { &self.recommended_usage }
    fn suggested_use(&self) -> &str { &self.suggested_use }
    fn category(&self) -> &str { &self.category }
}

impl<T: TemplateData + ?Sized> TemplateData for &T {
    fn name(&self) -> &str { (**self).name() }
    fn description(&self) -> &str { (**self).description() }
    fn recommended_usage(&self) -> &str { (**self).recommended_usage() }
    fn suggested_use(&self) -> &str { (**self).suggested_use() }
    fn category(&self) -> &str { (**self).category() }
}

/// フィールド値を取得
pub(crate) fn field_value<'a, T: TemplateData>(data: &'a T, key: &str) -> &'a str {
    match key {
        "name" => data.name(),
        "description" => data.description(),
        "recommended_usage" => data.recommended_usage(),
        "suggested_use" => data.suggested_use(),
        "category" => data.category(),
        _ => "",
    }
}

/// 出力対象のカテゴリ別件数（カテゴリ名順）
pub fn category_stats<T: TemplateData>(records: &[T]) -> Vec<(String, usize)> {
    let mut stats: std::collections::BTreeMap<&str, usize> = std::collections::BTreeMap::new();
    for record in records {
        *stats.entry(record.category()).or_default() += 1;
    }
    stats
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect()
}
