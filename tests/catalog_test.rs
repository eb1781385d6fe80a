//! 同梱カタログを使った検索・ウィザード・集計の統合テスト

use std::path::PathBuf;
use tempfile::tempdir;
use xtm_template_common::{
    aggregate, filter, missing_references, resolve, Catalog, FilterQuery, FlowGraph, ResolvedItem,
    RuleTable, UNCATEGORIZED,
};
use xtm_template_guide::config::Config;

/// 既定設定のカタログパスはリポジトリ直下からの相対パスで同梱データを指す
fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(Config::default().catalog_path);
    Catalog::load(&path).expect("同梱カタログの読み込み失敗")
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 17);
    assert!(catalog.duplicate_names().is_empty());
    assert_eq!(catalog.get("InDesign IDML").unwrap().category, UNCATEGORIZED);
}

#[test]
fn test_filter_sample_catalog() {
    let catalog = sample_catalog();

    let all = filter(&catalog, &FilterQuery::default());
    assert_eq!(all.len(), catalog.len());

    let subtitles = filter(&catalog, &FilterQuery::new("", "Subtitles"));
    let names: Vec<_> = subtitles.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["SRT Subtitles", "WebVTT Subtitles"]);

    // 説明文にもヒットする
    let hidden = filter(&catalog, &FilterQuery::new("HIDDEN", "All"));
    let names: Vec<_> = hidden.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["PPTX w/o Notes, Comments and Hidden Slides", "Excel w/o Hidden Sheets"]
    );
}

#[test]
fn test_wizard_against_sample_catalog() {
    let catalog = sample_catalog();
    let rules = RuleTable::builtin();

    let items = resolve(&catalog, &rules, "PowerPoint", "No").unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], ResolvedItem::Missing("PowerPoint without notes".into()));
    assert!(items[1].is_found());
    assert!(items[2].is_found());

    let items = resolve(&catalog, &rules, "Subtitles", "WebVTT").unwrap();
    assert_eq!(items, vec![ResolvedItem::Found(catalog.get("WebVTT Subtitles").unwrap())]);
}

#[test]
fn test_every_rule_resolves_without_error() {
    let catalog = sample_catalog();
    let rules = RuleTable::builtin();

    for file_type in rules.list_file_types() {
        let entry = rules.get(file_type).unwrap();
        for label in entry.answer_labels() {
            let items = resolve(&catalog, &rules, file_type, label).unwrap();
            assert_eq!(items.len(), entry.answer(label).unwrap().templates.len());
        }
    }

    // 同梱データではルール表の一部がカタログ未登録
    let missing = missing_references(&catalog, &rules);
    assert!(missing.iter().any(|m| m.name == "XLIFF 1.2"));
    assert!(!missing.iter().any(|m| m.name == "Bilingual Excel"));
}

#[test]
fn test_aggregate_sample_catalog() {
    let catalog = sample_catalog();
    let result = aggregate(&catalog);

    assert_eq!(result.total(), catalog.len());
    assert_eq!(result.counts()[0], ("PowerPoint", 3));
    assert_eq!(result.counts().last().copied(), Some((UNCATEGORIZED, 1)));

    let graph = FlowGraph::from_aggregate(&result);
    // ルート + カテゴリ8 + テンプレート17
    assert_eq!(graph.nodes.len(), 1 + 8 + 17);
    assert_eq!(graph.edges.len(), 8 + 17);
}

#[test]
fn test_config_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    // 存在しない場合は既定値
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    let config = Config {
        catalog_path: PathBuf::from("/srv/xtm/Filter Templates.json"),
        export_stem: "pm_templates".into(),
    };
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
