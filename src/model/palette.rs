use crate::model::baseline::CellColor;

/// Categorical point colors, looked up by dataset index. The first three
/// match the reference green/amber/red ordering; the rest extend the
/// palette for larger datasets.
pub const POINT_PALETTE: &[&str] = &[
    "#4CAF50", "#FFC107", "#FF5252", "#6495ED", "#9370DB", "#48D1CC", "#4169E1", "#008080",
];

pub fn point_color(index: usize) -> &'static str {
    POINT_PALETTE[index % POINT_PALETTE.len()]
}

// Fixed semantic colors.
pub const EFFICIENCY_BAR: &str = "#4CAF50";
pub const COVERAGE_BAR: &str = "#2196F3";
pub const FLAGGED_FILL: &str = "#2196F3";
pub const FOUND_FILL: &str = "#4CAF50";
pub const BASELINE_LINE: &str = "#aaaaaa";
pub const GRID_LINE: &str = "#dddddd";
pub const AXIS_TEXT: &str = "#666666";

pub fn cell_fill(color: CellColor) -> &'static str {
    match color {
        CellColor::Found => "#4CAF50",
        CellColor::FalsePositive => "#FFC107",
        CellColor::Missed => "#FF5252",
        CellColor::Unflagged => "#e0e0e0",
    }
}
