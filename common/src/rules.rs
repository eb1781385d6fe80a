//! 判定ウィザードのルール表
//!
//! ファイル種別 → 質問1つ → 回答ごとの推奨テンプレート名。
//! 手書きの定数データで、実行時の読み込みはない。
//! テンプレート名はカタログに存在するとは限らない（照合側で Missing として扱う）。

use crate::error::{Error, Result};
use std::collections::HashSet;

/// 回答1つと推奨テンプレート名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub label: &'static str,
    pub templates: &'static [&'static str],
}

/// ファイル種別ごとのルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry {
    pub file_type: &'static str,
    pub question: &'static str,
    pub answers: &'static [Answer],
}

impl RuleEntry {
    /// 回答ラベル一覧（定義順）
    pub fn answer_labels(&self) -> Vec<&'static str> {
        self.answers.iter().map(|a| a.label).collect()
    }

    /// 回答ラベルで検索
    pub fn answer(&self, label: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.label == label)
    }
}

/// ルール表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    entries: &'static [RuleEntry],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleTable {
    /// 任意のルールで構築（テスト用フィクスチャなど）
    pub const fn new(entries: &'static [RuleEntry]) -> Self {
        Self { entries }
    }

    /// 組み込みルール表
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_RULES)
    }

    pub fn entries(&self) -> &'static [RuleEntry] {
        self.entries
    }

    /// ファイル種別一覧（定義順）
    pub fn list_file_types(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.file_type).collect()
    }

    /// ファイル種別で検索
    ///
    /// `None` は呼び出し側が `list_file_types()` 以外の値を渡したことを意味する。
    pub fn get(&self, file_type: &str) -> Option<&'static RuleEntry> {
        self.entries.iter().find(|e| e.file_type == file_type)
    }

    /// 不変条件の検査（テスト・checkコマンド用）
    pub fn validate(&self) -> Result<()> {
        let mut file_types = HashSet::new();

        for entry in self.entries {
            if entry.file_type.trim().is_empty() {
                return Err(Error::InvalidRuleTable("empty file type".into()));
            }
            if !file_types.insert(entry.file_type) {
                return Err(Error::InvalidRuleTable(format!(
                    "duplicate file type '{}'",
                    entry.file_type
                )));
            }
            if entry.question.trim().is_empty() {
                return Err(Error::InvalidRuleTable(format!(
                    "'{}' has no question",
                    entry.file_type
                )));
            }
            if entry.answers.is_empty() {
                return Err(Error::InvalidRuleTable(format!(
                    "'{}' has no answers",
                    entry.file_type
                )));
            }

            let mut labels = HashSet::new();
            for answer in entry.answers {
                if !labels.insert(answer.label) {
                    return Err(Error::InvalidRuleTable(format!(
                        "'{}' has duplicate answer '{}'",
                        entry.file_type, answer.label
                    )));
                }
                if answer.templates.is_empty() {
                    return Err(Error::InvalidRuleTable(format!(
                        "'{}' / '{}' recommends no templates",
                        entry.file_type, answer.label
                    )));
                }
            }
        }

        Ok(())
    }
}

const BUILTIN_RULES: &[RuleEntry] = &[
    RuleEntry {
        file_type: "PowerPoint",
        question: "Do the speaker notes need to be translated?",
        answers: &[
            Answer {
                label: "Yes",
                templates: &["PowerPoint with notes", "PPT with Notes"],
            },
            Answer {
                label: "No",
                templates: &[
                    "PowerPoint without notes",
                    "PPT w/o Notes",
                    "PPTX w/o Notes, Comments and Hidden Slides",
                ],
            },
        ],
    },
    RuleEntry {
        file_type: "Excel",
        question: "Is the workbook bilingual (source and target in separate columns)?",
        answers: &[
            Answer {
                label: "Yes",
                templates: &["Bilingual Excel", "Excel bilingual columns"],
            },
            Answer {
                label: "No",
                templates: &["Excel default", "Excel w/o Hidden Sheets"],
            },
        ],
    },
    RuleEntry {
        file_type: "Word",
        question: "Should comments and tracked changes be translated?",
        answers: &[
            Answer {
                label: "Yes",
                templates: &["Word with Comments", "DOCX with Tracked Changes"],
            },
            Answer {
                label: "No",
                templates: &["Word default", "DOCX w/o Comments"],
            },
        ],
    },
    RuleEntry {
        file_type: "Subtitles",
        question: "Which subtitle format is the file in?",
        answers: &[
            Answer {
                label: "SRT",
                templates: &["SRT Subtitles"],
            },
            Answer {
                label: "WebVTT",
                templates: &["WebVTT Subtitles"],
            },
        ],
    },
    RuleEntry {
        file_type: "JSON",
        question: "Are the translatable strings only in the values?",
        answers: &[
            Answer {
                label: "Yes",
                templates: &["JSON values only"],
            },
            Answer {
                label: "No",
                templates: &["JSON keys and values", "JSON custom paths"],
            },
        ],
    },
    RuleEntry {
        file_type: "XML",
        question: "Does the XML follow a standard schema (DITA, XLIFF)?",
        answers: &[
            Answer {
                label: "Yes",
                templates: &["DITA XML", "XLIFF 1.2"],
            },
            Answer {
                label: "No",
                templates: &["XML generic", "XML custom rules"],
            },
        ],
    },
];
