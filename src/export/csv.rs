//! CSV出力（CLI版）

use crate::error::{GuideError, Result};
use std::path::Path;
use xtm_template_common::export::csv_core;
use xtm_template_common::TemplateRecord;

pub fn generate_csv(records: &[&TemplateRecord], output_path: &Path) -> Result<()> {
    let content = csv_core::generate_csv(records);
    std::fs::write(output_path, content.as_bytes())
        .map_err(|e| GuideError::CsvGeneration(format!("{}: {}", output_path.display(), e)))?;
    Ok(())
}
