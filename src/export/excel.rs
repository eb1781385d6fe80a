//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す

use crate::error::{GuideError, Result};
use std::path::Path;
use xtm_template_common::export::excel_core;
use xtm_template_common::TemplateRecord;

pub fn generate_excel(records: &[&TemplateRecord], output_path: &Path) -> Result<()> {
    let buffer = excel_core::generate_excel_buffer(records)
        .map_err(|e| GuideError::ExcelGeneration(e.to_string()))?;

    std::fs::write(output_path, buffer)
        .map_err(|e| GuideError::ExcelGeneration(format!("{}: {}", output_path.display(), e)))?;

    Ok(())
}
