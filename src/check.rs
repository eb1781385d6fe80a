//! ルール表とカタログの整合性チェック
//!
//! ルール表とカタログは別々に保守されるので、ずれを一覧にする。

use crate::error::{GuideError, Result};
use xtm_template_common::{missing_references, Catalog, MissingReference, RuleTable};

#[derive(Debug, Default)]
pub struct CheckReport {
    /// ルール表の不変条件違反
    pub rule_error: Option<String>,
    /// カタログ内の重複名
    pub duplicate_names: Vec<String>,
    /// カタログに存在しない推奨名
    pub missing: Vec<MissingReference>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    /// 検出件数（ルール表違反は1件と数える）
    pub fn issue_count(&self) -> usize {
        usize::from(self.rule_error.is_some()) + self.duplicate_names.len() + self.missing.len()
    }

    /// 問題があればエラー（終了コード1にする）
    pub fn ensure_clean(&self) -> Result<()> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(GuideError::CheckFailed(self.issue_count()))
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("🔎 整合性チェック\n\n");

        match &self.rule_error {
            Some(e) => out.push_str(&format!("✖ ルール表: {}\n", e)),
            None => out.push_str("✔ ルール表: OK\n"),
        }

        if self.duplicate_names.is_empty() {
            out.push_str("✔ 重複テンプレート名: なし\n");
        } else {
            out.push_str(&format!(
                "⚠ 重複テンプレート名: {}件（先頭のものが使われます）\n",
                self.duplicate_names.len()
            ));
            for name in &self.duplicate_names {
                out.push_str(&format!("  - {}\n", name));
            }
        }

        if self.missing.is_empty() {
            out.push_str("✔ カタログ未登録の推奨名: なし\n");
        } else {
            out.push_str(&format!("⚠ カタログ未登録の推奨名: {}件\n", self.missing.len()));
            for m in &self.missing {
                out.push_str(&format!("  - {} / {}: {}\n", m.file_type, m.answer, m.name));
            }
        }

        out
    }
}

pub fn run_check(catalog: &Catalog, rules: &RuleTable) -> CheckReport {
    CheckReport {
        rule_error: rules.validate().err().map(|e| e.to_string()),
        duplicate_names: catalog
            .duplicate_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        missing: missing_references(catalog, rules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtm_template_common::{Answer, RuleEntry, TemplateRecord};

    const RULES: &[RuleEntry] = &[RuleEntry {
        file_type: "Subtitles",
        question: "Which format?",
        answers: &[
            Answer { label: "SRT", templates: &["SRT Subtitles"] },
            Answer { label: "WebVTT", templates: &["WebVTT Subtitles"] },
        ],
    }];

    #[test]
    fn test_check_clean() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("SRT Subtitles", "Subtitles"),
            TemplateRecord::new("WebVTT Subtitles", "Subtitles"),
        ]);
        let report = run_check(&catalog, &RuleTable::new(RULES));
        assert!(report.is_clean());
        assert!(report.ensure_clean().is_ok());
        assert!(report.render().contains("✔ カタログ未登録の推奨名: なし"));
    }

    #[test]
    fn test_check_reports_drift() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("SRT Subtitles", "Subtitles"),
            TemplateRecord::new("SRT Subtitles", "Subtitles"),
        ]);
        let report = run_check(&catalog, &RuleTable::new(RULES));

        assert!(!report.is_clean());
        assert_eq!(report.issue_count(), 2);
        assert!(matches!(report.ensure_clean(), Err(GuideError::CheckFailed(2))));
        assert_eq!(report.duplicate_names, vec!["SRT Subtitles"]);
        assert_eq!(report.missing.len(), 1);
        assert!(report.render().contains("Subtitles / WebVTT: WebVTT Subtitles"));
    }

    #[test]
    fn test_check_reports_invalid_rules() {
        const BROKEN: &[RuleEntry] = &[RuleEntry { file_type: "PDF", question: "?", answers: &[] }];
        let report = run_check(&Catalog::default(), &RuleTable::new(BROKEN));
        assert!(report.rule_error.is_some());
        assert!(report.render().contains("✖ ルール表"));
    }
}
