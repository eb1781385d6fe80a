//! テンプレートカタログ
//!
//! 起動時に一度だけ読み込み、以後は読み取り専用で参照渡しする。

use crate::error::{Error, Result};
use crate::types::{RawTemplate, TemplateRecord};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// 読み込み済みテンプレートの一覧（JSONの並び順を保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<TemplateRecord>,
}

impl Catalog {
    /// 正規化済みレコードから構築（テスト用フィクスチャなど）
    pub fn new(templates: Vec<TemplateRecord>) -> Self {
        Self { templates }
    }

    /// JSONファイルから読み込み
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json_str(&content).map_err(|e| match e {
            Error::Load(message) => Error::Load(format!("{}: {}", path.display(), message)),
            other => other,
        })?;

        log::info!("{} templates loaded from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// JSON文字列から読み込み
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: Vec<RawTemplate> =
            serde_json::from_str(content).map_err(|e| Error::Load(e.to_string()))?;
        Self::from_records(raw)
    }

    /// 未正規化レコードから構築（既定値の適用・name必須チェック）
    pub fn from_records(raw: Vec<RawTemplate>) -> Result<Self> {
        let mut templates = Vec::with_capacity(raw.len());

        for (index, record) in raw.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(Error::Load(format!("template #{} has an empty name", index + 1)));
            }
            templates.push(TemplateRecord::from(record));
        }

        let catalog = Self { templates };
        for name in catalog.duplicate_names() {
            log::warn!("duplicate template name '{}': first entry wins on lookup", name);
        }
        Ok(catalog)
    }

    /// 全テンプレート
    pub fn templates(&self) -> &[TemplateRecord] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateRecord> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// 名前で検索（完全一致・大文字小文字区別、先頭一致優先）
    pub fn get(&self, name: &str) -> Option<&TemplateRecord> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// カテゴリ一覧（ソート・重複除去）
    pub fn categories(&self) -> Vec<&str> {
        self.templates
            .iter()
            .map(|t| t.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 2回以上出現する名前（初出順）
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for template in &self.templates {
            let name = template.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }

        duplicates
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TemplateRecord;
    type IntoIter = std::slice::Iter<'a, TemplateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
