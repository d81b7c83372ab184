use super::*;
use crate::model::builtin_dataset;

fn cell_count(svg: &str, fill: &str) -> usize {
    svg.lines()
        .filter(|l| l.contains("class=\"cell\"") && l.contains(fill))
        .count()
}

fn total_cells(svg: &str) -> usize {
    svg.lines().filter(|l| l.contains("class=\"cell\"")).count()
}

#[test]
fn test_banner_sentence() {
    let dataset = builtin_dataset();
    assert_eq!(
        banner_sentence(&dataset.models[0]),
        "Model A finds 82% of important content while flagging only 12.5% of documents for review."
    );
}

#[test]
fn test_bottom_line() {
    let baseline = ReviewBaseline::default();
    let counts = baseline.outcome(&builtin_dataset().models[0]);
    assert_eq!(
        bottom_line(&counts, &baseline),
        "Bottom line: Review 13 documents instead of 100, while still finding 12 out of 15 important items."
    );
}

#[test]
fn test_grid_always_has_100_cells() {
    let baseline = ReviewBaseline::default();
    let dataset = builtin_dataset();
    for model in &dataset.models {
        let svg = render_recommendation(model, &baseline);
        assert_eq!(total_cells(&svg), 100);
    }

    let mut zeroed = dataset.models[0].clone();
    zeroed.content_flagged = 0.0;
    zeroed.items_found = 0.0;
    let svg = render_recommendation(&zeroed, &baseline);
    assert_eq!(total_cells(&svg), 100);
}

#[test]
fn test_grid_cell_distribution_for_reference_model() {
    let baseline = ReviewBaseline::default();
    let svg = render_recommendation(&builtin_dataset().models[0], &baseline);
    // flagged=13, found=12, high priority=15.
    assert_eq!(cell_count(&svg, "#4CAF50"), 12);
    assert_eq!(cell_count(&svg, "#FFC107"), 1);
    assert_eq!(cell_count(&svg, "#FF5252"), 2);
    assert_eq!(cell_count(&svg, "#e0e0e0"), 85);
}

#[test]
fn test_legend_counts() {
    let baseline = ReviewBaseline::default();
    let svg = render_recommendation(&builtin_dataset().models[0], &baseline);
    assert!(svg.contains("Found (12)"));
    assert!(svg.contains("Missed (3)"));
    assert!(svg.contains("False positives (1)"));
}

#[test]
fn test_legend_false_positives_clamped_to_zero() {
    let baseline = ReviewBaseline::default();
    let mut model = builtin_dataset().models[0].clone();
    model.items_found = 100.0;
    model.content_flagged = 5.0;
    let svg = render_recommendation(&model, &baseline);
    assert!(svg.contains("False positives (0)"));
}

#[test]
fn test_headline_and_progress_labels() {
    let baseline = ReviewBaseline::default();
    let svg = render_recommendation(&builtin_dataset().models[0], &baseline);
    assert!(svg.contains("Recommended: Model A"));
    assert!(svg.contains("Documents Flagged"));
    assert!(svg.contains("Important Items Found"));
    assert!(svg.contains(">12.5%</text>"));
    assert!(svg.contains(">82%</text>"));
}

#[test]
fn test_custom_baseline_flows_into_bottom_line() {
    let baseline = ReviewBaseline {
        total_documents: 100,
        high_priority_count: 20,
    };
    let counts = baseline.outcome(&builtin_dataset().models[0]);
    // 82% of 20 = 16.4, rounds to 16.
    assert_eq!(counts.found, 16);
    let svg = render_recommendation(&builtin_dataset().models[0], &baseline);
    assert!(svg.contains("finding 16 out of 20 important items"));
}
