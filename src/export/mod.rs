pub mod csv;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::{GuideError, Result};
use std::path::{Path, PathBuf};
use xtm_template_common::TemplateRecord;

/// 拡張子が出力形式と違う場合は置き換える（CSVを .xlsx に書かない）
fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.with_extension(extension)
    }
}

fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let csv_path = output.join(format!("{}.csv", stem));
        let excel_path = output.join(format!("{}.xlsx", stem));
        (csv_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        let csv_path = parent.join(format!("{}.csv", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (csv_path, excel_path)
    }
}

/// 絞り込み結果を出力し、書き出したパスを返す
pub fn export_templates(
    records: &[&TemplateRecord],
    format: &ExportFormat,
    output: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        return Err(GuideError::NoMatchingTemplates);
    }

    let mut written = Vec::new();

    match format {
        ExportFormat::Csv => {
            let output_path = output_path_for_format(output, stem, "csv");
            ensure_parent_dir(&output_path)?;
            println!("- CSVを生成中...");
            csv::generate_csv(records, &output_path)?;
            println!("✔ CSV出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, stem, "xlsx");
            ensure_parent_dir(&output_path)?;
            println!("- Excelを生成中...");
            excel::generate_excel(records, &output_path)?;
            println!("✔ Excel出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (csv_path, excel_path) = output_paths_for_both(output, stem);
            ensure_parent_dir(&csv_path)?;

            println!("- CSVを生成中...");
            csv::generate_csv(records, &csv_path)?;
            println!("✔ CSV出力: {}", csv_path.display());

            println!("- Excelを生成中...");
            excel::generate_excel(records, &excel_path)?;
            println!("✔ Excel出力: {}", excel_path.display());

            written.push(csv_path);
            written.push(excel_path);
        }
    }

    log::debug!("{} templates exported", records.len());
    Ok(written)
}

/// 出力先ディレクトリがなければ作る
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
