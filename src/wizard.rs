//! 対話式の判定ウィザード
//!
//! ファイル種別 → 質問 → 推奨テンプレート の順に案内する。
//! 引数で両方指定された場合はプロンプトを出さない。

use crate::error::{GuideError, Result};
use crate::view::render_record;
use dialoguer::Select;
use xtm_template_common::{resolve, Catalog, Error, ResolvedItem, RuleEntry, RuleTable};

/// ウィザードを実行
pub fn run_wizard(
    catalog: &Catalog,
    rules: &RuleTable,
    file_type: Option<&str>,
    answer: Option<&str>,
) -> Result<()> {
    println!("🧭 テンプレート選択ウィザード\n");

    let entry = match file_type {
        Some(file_type) => rules
            .get(file_type)
            .ok_or_else(|| Error::UnknownFileType(file_type.to_string()))?,
        None => prompt_file_type(rules)?,
    };

    println!("[1/2] ファイル種別: {}", entry.file_type);
    println!("[2/2] {}", entry.question);

    let answer = match answer {
        Some(answer) => answer.to_string(),
        None => prompt_answer(entry)?,
    };
    println!("  → {}\n", answer);

    let items = resolve(catalog, rules, entry.file_type, &answer)?;
    print!("{}", render_suggestions(&items));

    Ok(())
}

/// ファイル種別の選択
fn prompt_file_type(rules: &RuleTable) -> Result<&'static RuleEntry> {
    let file_types = rules.list_file_types();

    let index = Select::new()
        .with_prompt("ファイル種別を選択してください")
        .items(&file_types)
        .default(0)
        .interact()
        .map_err(|e| GuideError::Prompt(e.to_string()))?;

    rules
        .get(file_types[index])
        .ok_or_else(|| Error::UnknownFileType(file_types[index].to_string()).into())
}

/// 回答の選択（候補はファイル種別ごとに異なる）
fn prompt_answer(entry: &RuleEntry) -> Result<String> {
    let labels = entry.answer_labels();

    let index = Select::new()
        .with_prompt(entry.question)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| GuideError::Prompt(e.to_string()))?;

    Ok(labels[index].to_string())
}

/// 推奨テンプレートの表示
pub fn render_suggestions(items: &[ResolvedItem<'_>]) -> String {
    let mut out = String::from("💡 推奨テンプレート:\n");

    for item in items {
        match item {
            ResolvedItem::Found(record) => {
                out.push_str(&format!("\n✔ {}\n", record.name));
                out.push_str(&render_record(record, "    "));
            }
            ResolvedItem::Missing(name) => {
                out.push_str(&format!("\n⚠ テンプレート「{}」はカタログに見つかりません\n", name));
            }
        }
    }

    let missing = items.iter().filter(|i| !i.is_found()).count();
    if missing > 0 {
        out.push_str(&format!(
            "\n({}件中{}件がカタログ未登録です。`xtm-guide check` で一覧を確認できます)\n",
            items.len(),
            missing
        ));
    }

    out
}
