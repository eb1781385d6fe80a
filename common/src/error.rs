//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog load error: {0}")]
    Load(String),

    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    #[error("Unknown answer '{answer}' for file type '{file_type}'")]
    UnknownAnswer { file_type: String, answer: String },

    #[error("Invalid rule table: {0}")]
    InvalidRuleTable(String),

    #[error("Export error: {0}")]
    Export(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
