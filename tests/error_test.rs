//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use xtm_template_common::Catalog;
use xtm_template_guide::config::Config;
use xtm_template_guide::error::GuideError;

/// 存在しないカタログを読み込んだ場合
#[test]
fn test_load_nonexistent_catalog() {
    let result = Catalog::load(Path::new("/nonexistent/path/Filter Templates.json"));
    let err: GuideError = result.unwrap_err().into();

    assert!(matches!(err, GuideError::Common(xtm_template_common::Error::Load(_))));
    // 透過的エラーなのでメッセージがそのまま表示される
    assert!(format!("{}", err).contains("Catalog load error"));
}

/// 壊れたJSONを読み込んだ場合
#[test]
fn test_load_malformed_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"name": "PPT w/o Notes", }"#).unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, xtm_template_common::Error::Load(_)));
    assert!(err.to_string().contains("broken.json"));
}

/// nameのないレコードを含む場合は部分的なカタログを作らない
#[test]
fn test_load_catalog_missing_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("templates.json");
    std::fs::write(&path, r#"[{"name": "ok"}, {"category": "Excel"}]"#).unwrap();

    assert!(Catalog::load(&path).is_err());
}

/// 空のカタログはエラーではない
#[test]
fn test_load_empty_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let catalog = Catalog::load(&path).expect("空配列は読み込めるべき");
    assert!(catalog.is_empty());
}

/// 壊れた設定ファイル
#[test]
fn test_config_malformed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, GuideError::JsonParse(_)));
}

/// GuideErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GuideError::Config("テスト設定エラー".to_string()),
        GuideError::CsvGeneration("CSV生成エラー".to_string()),
        GuideError::ExcelGeneration("Excel生成エラー".to_string()),
        GuideError::Prompt("入力中断".to_string()),
        GuideError::NoMatchingTemplates,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GuideError = io_err.into();

    assert!(matches!(err, GuideError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = xtm_template_common::Error::UnknownFileType("PDF".to_string());
    let err: GuideError = common_err.into();

    assert!(matches!(err, GuideError::Common(_)));
    assert_eq!(format!("{}", err), "Unknown file type: PDF");
}
