use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] xtm_template_common::Error),

    #[error("CSV生成エラー: {0}")]
    CsvGeneration(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("整合性チェックで{0}件の問題が見つかりました")]
    CheckFailed(usize),

    #[error("エクスポート対象のテンプレートがありません。検索条件を見直してください")]
    NoMatchingTemplates,
}

pub type Result<T> = std::result::Result<T, GuideError>;
