use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::{MetricsDataset, builtin_dataset};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("triage_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn build_input(dataset: &MetricsDataset) -> DashboardInput<'_> {
    DashboardInput {
        dataset,
        recommended: dataset.models.first(),
        baseline: ReviewBaseline::default(),
        tool_name: "triage-compare",
        tool_version: "0.0.0-test",
    }
}

#[test]
fn test_write_all_reports() {
    let dataset = builtin_dataset();
    let input = build_input(&dataset);
    let dir = make_temp_dir();
    write_reports(&input, &dir, ReportFormat::All).unwrap();
    assert!(dir.join(HTML_FILE).exists());
    assert!(dir.join(TEXT_FILE).exists());
    assert!(dir.join(JSON_FILE).exists());
}

#[test]
fn test_write_single_format_only() {
    let dataset = builtin_dataset();
    let input = build_input(&dataset);
    let dir = make_temp_dir();
    write_reports(&input, &dir, ReportFormat::Json).unwrap();
    assert!(!dir.join(HTML_FILE).exists());
    assert!(!dir.join(TEXT_FILE).exists());
    assert!(dir.join(JSON_FILE).exists());
}

#[test]
fn test_write_creates_missing_directory() {
    let dataset = builtin_dataset();
    let input = build_input(&dataset);
    let dir = make_temp_dir().join("nested").join("out");
    write_reports(&input, &dir, ReportFormat::Text).unwrap();
    assert!(dir.join(TEXT_FILE).exists());
}

#[test]
fn test_html_embeds_all_three_charts() {
    let dataset = builtin_dataset();
    let input = build_input(&dataset);
    let page = html::render_dashboard_html(&input);
    assert_eq!(page.matches("<svg").count(), 3);
    assert!(page.contains("Model Performance Comparison"));
    assert!(page.contains("Recommended: Model A"));
    assert!(page.contains("Random Selection"));
}

#[test]
fn test_html_empty_dataset_skips_recommendation() {
    let dataset = MetricsDataset::default();
    let input = build_input(&dataset);
    let page = html::render_dashboard_html(&input);
    assert_eq!(page.matches("<svg").count(), 2);
    assert!(!page.contains("Recommended:"));
}

#[test]
fn test_text_summary_sections() {
    let dataset = builtin_dataset();
    let input = build_input(&dataset);
    let summary = text::render_summary_text(&input);
    assert!(summary.contains("1. Recommendation"));
    assert!(summary.contains("Recommended model: Model A"));
    assert!(summary.contains("2. Efficiency"));
    assert!(summary.contains("3. Coverage"));
    assert!(summary.contains("4. Selectivity"));
    assert!(summary.contains("review savings 87.5%"));
    assert!(summary.contains(
        "Review 13 documents instead of 100, while still finding 12 out of 15 important items."
    ));
}

#[test]
fn test_text_summary_empty_dataset() {
    let dataset = MetricsDataset::default();
    let input = build_input(&dataset);
    let summary = text::render_summary_text(&input);
    assert!(summary.contains("No models in dataset."));
}

#[test]
fn test_json_summary_shape() {
    let dataset = builtin_dataset();
    let input = build_input(&dataset);
    let raw = json::render_summary_json(&input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["tool"]["name"], "triage-compare");
    assert_eq!(value["baseline"]["total_documents"], 100);
    assert_eq!(value["baseline"]["high_priority_count"], 15);
    assert_eq!(value["models"].as_array().unwrap().len(), 3);
    assert_eq!(value["models"][0]["name"], "Model A");
    assert_eq!(value["models"][0]["review_savings"], 87.5);
    assert_eq!(value["recommendation"]["found_count"], 12);
    assert_eq!(value["recommendation"]["flagged_count"], 13);
    assert_eq!(value["recommendation"]["missed"], 3);
    assert_eq!(value["recommendation"]["false_positives"], 1);
}

#[test]
fn test_json_summary_empty_dataset_has_no_recommendation() {
    let dataset = MetricsDataset::default();
    let input = build_input(&dataset);
    let raw = json::render_summary_json(&input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("recommendation").is_none());
    assert_eq!(value["models"].as_array().unwrap().len(), 0);
}
