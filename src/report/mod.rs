//! Scan report rendering.
//!
//! The renderer is picked once from configuration. Rendering only reads the
//! finished `ScanReport`.

mod html;
mod xlsx;

pub use html::render_html;
pub use xlsx::write_workbook;

use std::path::Path;

use log::info;

use crate::config::ReportFormat;
use crate::error_handling::ReportError;
use crate::scan::ScanReport;

/// Output produced after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRenderer {
    /// Standalone HTML page
    Html,
    /// XLSX workbook
    Spreadsheet,
    /// No report
    None,
}

impl From<Option<ReportFormat>> for ReportRenderer {
    fn from(format: Option<ReportFormat>) -> Self {
        match format {
            Some(ReportFormat::Html) => ReportRenderer::Html,
            Some(ReportFormat::Xlsx) => ReportRenderer::Spreadsheet,
            None => ReportRenderer::None,
        }
    }
}

/// Writes `report` to `path` with the chosen renderer.
///
/// # Errors
///
/// Returns a `ReportError` if the file cannot be written or the workbook
/// cannot be assembled.
pub fn render_report(
    renderer: ReportRenderer,
    report: &ScanReport,
    path: &Path,
) -> Result<(), ReportError> {
    match renderer {
        ReportRenderer::Html => std::fs::write(path, render_html(report))?,
        ReportRenderer::Spreadsheet => write_workbook(report, path)?,
        ReportRenderer::None => return Ok(()),
    }
    info!("Report written to {}", path.display());
    Ok(())
}
