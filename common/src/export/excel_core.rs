//! Excel生成（共通ライブラリ）
//!
//! 2シート構成:
//! - Templates: 出力対象テンプレートの一覧
//! - Stats by Category: カテゴリ別件数（カテゴリ名順）
//!
//! ヘッダーは青地(#4F81BD)・白太字、列幅は最長セル文字数+2。

use super::{category_stats, field_value, TemplateData, TEMPLATE_COLUMNS};
use crate::error::{Error, Result};
use rust_xlsxwriter::*;

pub const TEMPLATES_SHEET: &str = "Templates";
pub const STATS_SHEET: &str = "Stats by Category";
pub const STATS_HEADERS: [&str; 2] = ["category", "Count"];

const HEADER_FILL: u32 = 0x4F81BD;
const WIDTH_PADDING: usize = 2;

fn export_error(context: &'static str) -> impl Fn(XlsxError) -> Error {
    move |e| Error::Export(format!("{}: {}", context, e))
}

/// 文字数ベースの列幅
fn column_width<'a>(cells: impl IntoIterator<Item = &'a str>) -> f64 {
    let max_len = cells
        .into_iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    (max_len + WIDTH_PADDING) as f64
}

/// Excelをバッファに生成
pub fn generate_excel_buffer<T: TemplateData>(records: &[T]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid);

    // --- Sheet 1: Templates ---
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(TEMPLATES_SHEET)
        .map_err(export_error("シート名設定エラー"))?;

    for (col, column) in TEMPLATE_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, column.header, &header_format)
            .map_err(export_error("ヘッダー書き込みエラー"))?;

        for (row, record) in records.iter().enumerate() {
            let value = field_value(record, column.key);
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(row as u32 + 1, col, value)
                .map_err(export_error("値書き込みエラー"))?;
        }

        let width = column_width(
            std::iter::once(column.header)
                .chain(records.iter().map(|r| field_value(r, column.key))),
        );
        worksheet
            .set_column_width(col, width)
            .map_err(export_error("列幅設定エラー"))?;
    }

    // --- Sheet 2: Stats by Category ---
    let stats = category_stats(records);
    let count_texts: Vec<String> = stats.iter().map(|(_, count)| count.to_string()).collect();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(STATS_SHEET)
        .map_err(export_error("シート名設定エラー"))?;

    for (col, header) in STATS_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(export_error("ヘッダー書き込みエラー"))?;
    }

    for (row, (category, count)) in stats.iter().enumerate() {
        let row = row as u32 + 1;
        worksheet
            .write_string(row, 0, category)
            .map_err(export_error("値書き込みエラー"))?;
        worksheet
            .write_number(row, 1, *count as f64)
            .map_err(export_error("値書き込みエラー"))?;
    }

    let category_width = column_width(
        std::iter::once(STATS_HEADERS[0]).chain(stats.iter().map(|(c, _)| c.as_str())),
    );
    let count_width = column_width(
        std::iter::once(STATS_HEADERS[1]).chain(count_texts.iter().map(String::as_str)),
    );
    worksheet
        .set_column_width(0, category_width)
        .map_err(export_error("列幅設定エラー"))?;
    worksheet
        .set_column_width(1, count_width)
        .map_err(export_error("列幅設定エラー"))?;

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(export_error("Excel保存エラー"))
}
