use super::*;
use crate::model::builtin_dataset;
use crate::model::palette::point_color;

fn count_lines_with(svg: &str, needle: &str) -> usize {
    svg.lines().filter(|l| l.contains(needle)).count()
}

#[test]
fn test_fixed_domains() {
    assert_eq!(X_DOMAIN, (0.0, 40.0));
    assert_eq!(Y_DOMAIN, (0.0, 100.0));
}

#[test]
fn test_diagonal_endpoints_are_fixed() {
    assert_eq!(DIAGONAL_START, (0.0, 0.0));
    assert_eq!(DIAGONAL_END, (100.0, 100.0));
}

#[test]
fn test_scatter_tooltip() {
    let dataset = builtin_dataset();
    assert_eq!(
        scatter_tooltip(&dataset.models[0]),
        "Model A\nFlags 12.5% of content\nFinds 82% of important items"
    );
}

#[test]
fn test_render_one_point_per_model() {
    let svg = render_scatter(&builtin_dataset());
    assert_eq!(count_lines_with(&svg, "class=\"point\""), 3);
    assert!(svg.contains(">Model A</text>"));
    assert!(svg.contains(">Model B</text>"));
    assert!(svg.contains(">Model C</text>"));
}

#[test]
fn test_render_points_use_palette_by_index() {
    let svg = render_scatter(&builtin_dataset());
    for i in 0..builtin_dataset().models.len() {
        let fill = format!("fill=\"{}\"", point_color(i));
        assert!(
            count_lines_with(&svg, &fill) > 0,
            "missing palette color for index {i}"
        );
    }
}

#[test]
fn test_render_baseline_regardless_of_dataset() {
    let with_data = render_scatter(&builtin_dataset());
    let empty = render_scatter(&crate::model::MetricsDataset::default());
    for svg in [&with_data, &empty] {
        assert_eq!(count_lines_with(svg, "class=\"baseline\""), 1);
        assert!(svg.contains(DIAGONAL_LABEL));
    }
}

#[test]
fn test_empty_dataset_renders_no_points() {
    let svg = render_scatter(&crate::model::MetricsDataset::default());
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(count_lines_with(&svg, "class=\"point\""), 0);
}

#[test]
fn test_axis_labels() {
    let svg = render_scatter(&builtin_dataset());
    assert!(svg.contains("Content Flagged (%)"));
    assert!(svg.contains("Important Items Found (%)"));
}
