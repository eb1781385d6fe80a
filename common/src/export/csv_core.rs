//! CSV生成（共通ライブラリ）
//!
//! ヘッダー行 + 1レコード1行。カンマ・ダブルクォート・改行を含む値はクォートする。

use super::{field_value, TemplateData, TEMPLATE_COLUMNS};

/// CSV文字列を生成
pub fn generate_csv<T: TemplateData>(records: &[T]) -> String {
    let mut out = String::new();

    let header: Vec<&str> = TEMPLATE_COLUMNS.iter().map(|c| c.header).collect();
    push_row(&mut out, &header);

    for record in records {
        let row: Vec<&str> = TEMPLATE_COLUMNS
            .iter()
            .map(|c| field_value(record, c.key))
            .collect();
        push_row(&mut out, &row);
    }

    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// 必要な場合のみクォート（内部の " は "" に）
fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
