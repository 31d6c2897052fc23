pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::scores::EngineReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

/// Writes `report.txt` and/or `report.json` into `out_dir`, creating
/// the directory if needed.
pub fn write_reports(
    report: &EngineReport,
    out_dir: &Path,
    format: ReportFormat,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        write_text(&out_dir.join("report.txt"), &text::render_report_text(report))?;
    }
    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        write_text(&out_dir.join("report.json"), &json::render_report_json(report)?)?;
    }

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/render.rs"]
mod tests;
