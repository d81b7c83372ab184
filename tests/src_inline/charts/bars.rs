use super::*;
use crate::model::builtin_dataset;

fn count_lines_with(svg: &str, needle: &str) -> usize {
    svg.lines().filter(|l| l.contains(needle)).count()
}

#[test]
fn test_y_domain_is_full_percent_range() {
    assert_eq!(Y_DOMAIN, (0.0, 100.0));
}

#[test]
fn test_tooltip_sentences() {
    let dataset = builtin_dataset();
    let a = &dataset.models[0];
    assert_eq!(efficiency_sentence(a), "98% of flagged items are important");
    assert_eq!(coverage_sentence(a), "Finds 82% of important items");
    assert_eq!(flagged_sentence(a), "Flags 12.5% of all content");
}

#[test]
fn test_bar_tooltip_includes_name_and_metric_line() {
    let dataset = builtin_dataset();
    let tooltip = bar_tooltip(&dataset.models[1], BarMetric::Coverage);
    assert!(tooltip.starts_with("Model B\n"));
    assert!(tooltip.contains("Flags 16.2% of all content"));
    assert!(tooltip.contains("Finds 69% of important items"));
}

#[test]
fn test_render_has_one_bar_per_model_per_panel() {
    let dataset = builtin_dataset();
    let svg = render_side_by_side(&dataset);
    assert_eq!(count_lines_with(&svg, "class=\"bar\""), 6);
    assert_eq!(count_lines_with(&svg, "<title>"), 6);
}

#[test]
fn test_render_labels_both_panels() {
    let svg = render_side_by_side(&builtin_dataset());
    assert!(svg.contains(">Efficiency</text>"));
    assert!(svg.contains(">Coverage</text>"));
    assert!(svg.contains("% of flagged items that are actually important"));
    assert!(svg.contains("% of important items found"));
}

#[test]
fn test_render_axis_ticks_span_full_domain() {
    let svg = render_side_by_side(&builtin_dataset());
    assert!(svg.contains(">0%</text>"));
    assert!(svg.contains(">100%</text>"));
}

#[test]
fn test_empty_dataset_renders_axes_only() {
    let dataset = crate::model::MetricsDataset::default();
    let svg = render_side_by_side(&dataset);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(count_lines_with(&svg, "class=\"bar\""), 0);
    assert!(svg.contains(">100%</text>"));
}

#[test]
fn test_comparison_note_single_leader() {
    let note = comparison_note(&builtin_dataset()).unwrap();
    assert_eq!(
        note,
        "Model A is most efficient (98%) while still finding the most important items (82%)."
    );
}

#[test]
fn test_comparison_note_split_leaders() {
    let mut dataset = builtin_dataset();
    dataset.models[2].coverage = 95.0;
    let note = comparison_note(&dataset).unwrap();
    assert!(note.contains("Model A is most efficient (98%)"));
    assert!(note.contains("Model C finds the most important items (95%)"));
}

#[test]
fn test_comparison_note_empty_dataset() {
    assert!(comparison_note(&crate::model::MetricsDataset::default()).is_none());
}
