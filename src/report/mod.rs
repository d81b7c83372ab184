pub mod html;
pub mod json;
pub mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::baseline::ReviewBaseline;
use crate::model::{MetricsDataset, MetricsError, ModelMetric};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Text,
    Json,
    All,
}

impl ReportFormat {
    fn wants_html(self) -> bool {
        matches!(self, ReportFormat::Html | ReportFormat::All)
    }

    fn wants_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::All)
    }

    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::All)
    }
}

/// Everything the report renderers need for one dashboard.
#[derive(Debug)]
pub struct DashboardInput<'a> {
    pub dataset: &'a MetricsDataset,
    pub recommended: Option<&'a ModelMetric>,
    pub baseline: ReviewBaseline,
    pub tool_name: &'static str,
    pub tool_version: &'static str,
}

pub const HTML_FILE: &str = "dashboard.html";
pub const TEXT_FILE: &str = "summary.txt";
pub const JSON_FILE: &str = "summary.json";

pub fn write_reports(
    input: &DashboardInput<'_>,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<(), MetricsError> {
    std::fs::create_dir_all(out_dir)?;

    if format.wants_html() {
        let path = out_dir.join(HTML_FILE);
        write_file(&path, &html::render_dashboard_html(input))?;
        tracing::info!(path = %path.display(), "wrote HTML dashboard");
    }
    if format.wants_text() {
        let path = out_dir.join(TEXT_FILE);
        write_file(&path, &text::render_summary_text(input))?;
        tracing::info!(path = %path.display(), "wrote text summary");
    }
    if format.wants_json() {
        let path = out_dir.join(JSON_FILE);
        write_file(&path, &json::render_summary_json(input)?)?;
        tracing::info!(path = %path.display(), "wrote JSON summary");
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), MetricsError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
