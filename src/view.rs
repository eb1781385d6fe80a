//! テンプレート一覧の表示

use xtm_template_common::TemplateRecord;

/// 1件分の詳細（各行にインデントを付ける）
pub fn render_record(record: &TemplateRecord, indent: &str) -> String {
    format!(
        "{indent}説明: {}\n{indent}推奨用途: {}\n{indent}使用例: {}\n{indent}カテゴリ: {}\n",
        record.description,
        record.recommended_usage,
        record.suggested_use,
        record.category,
        indent = indent,
    )
}

/// 検索結果の一覧
pub fn render_listing(records: &[&TemplateRecord]) -> String {
    let mut out = format!("📂 フィルタテンプレート: {}件\n", records.len());

    if records.is_empty() {
        out.push_str("\n該当するテンプレートがありません。検索条件を変更してください。\n");
        return out;
    }

    for record in records {
        out.push_str(&format!("\n📌 {}\n", record.name));
        out.push_str(&render_record(record, "  "));
    }

    out
}

/// カテゴリ選択肢（先頭は All）
pub fn render_categories(categories: &[&str]) -> String {
    let mut out = String::from("All\n");
    for category in categories {
        out.push_str(category);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_listing_with_records() {
        let a = TemplateRecord {
            description: "Skips speaker notes".into(),
            ..TemplateRecord::new("PPT w/o Notes", "PowerPoint")
        };
        let b = TemplateRecord::new("Bilingual Excel", "Excel");
        let out = render_listing(&[&a, &b]);

        assert!(out.starts_with("📂 フィルタテンプレート: 2件"));
        assert!(out.contains("📌 PPT w/o Notes"));
        assert!(out.contains("  説明: Skips speaker notes"));
        assert!(out.contains("  カテゴリ: Excel"));
        // 元の並び順
        assert!(out.find("PPT w/o Notes").unwrap() < out.find("Bilingual Excel").unwrap());
    }

    #[test]
    fn test_render_listing_empty() {
        let out = render_listing(&[]);
        assert!(out.contains("0件"));
        assert_eq!(
            out,
            "📂 フィルタテンプレート: 0件\n\n該当するテンプレートがありません。検索条件を変更してください。\n"
        );
    }

    #[test]
    fn test_render_categories() {
        assert_eq!(render_categories(&["Excel", "Word"]), "All\nExcel\nWord\n");
    }
}
