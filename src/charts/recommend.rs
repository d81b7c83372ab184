use std::fmt::Write;

use crate::charts::{fmt_coord, fmt_percent, xml_escape};
use crate::model::ModelMetric;
use crate::model::baseline::{CellColor, OutcomeCounts, ReviewBaseline, cell_color};
use crate::model::palette::{AXIS_TEXT, FLAGGED_FILL, FOUND_FILL, cell_fill};

const WIDTH: f64 = 660.0;
const HEIGHT: f64 = 440.0;
const LEFT_COLUMN_X: f64 = 24.0;
const RIGHT_COLUMN_X: f64 = 360.0;
const COLUMN_TOP: f64 = 96.0;
const PROGRESS_WIDTH: f64 = 280.0;
const PROGRESS_HEIGHT: f64 = 12.0;

pub const GRID_CELLS: u32 = 100;
const GRID_COLUMNS: u32 = 20;
const CELL_SIZE: f64 = 12.0;
const CELL_GAP: f64 = 2.0;

pub fn banner_sentence(model: &ModelMetric) -> String {
    format!(
        "{} finds {}% of important content while flagging only {}% of documents for review.",
        model.name,
        fmt_percent(model.items_found),
        fmt_percent(model.content_flagged)
    )
}

pub fn bottom_line(counts: &OutcomeCounts, baseline: &ReviewBaseline) -> String {
    format!(
        "Bottom line: Review {} documents instead of {}, while still finding {} out of {} important items.",
        counts.flagged, baseline.total_documents, counts.found, baseline.high_priority_count
    )
}

/// Single-model highlight panel: headline, two progress bars, the
/// 100-cell pictographic grid with legend, and the bottom-line sentence.
pub fn render_recommendation(model: &ModelMetric, baseline: &ReviewBaseline) -> String {
    let counts = baseline.outcome(model);

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
    );

    let _ = write!(
        out,
        "<text x=\"{}\" y=\"28\" font-size=\"18\" font-weight=\"700\">Recommended: {}</text>\n",
        fmt_coord(LEFT_COLUMN_X),
        xml_escape(&model.name)
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"54\" font-size=\"12\">{}</text>\n",
        fmt_coord(LEFT_COLUMN_X),
        xml_escape(&banner_sentence(model))
    );

    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"14\" font-weight=\"500\">Key Metrics</text>\n",
        fmt_coord(LEFT_COLUMN_X),
        fmt_coord(COLUMN_TOP)
    );
    render_progress(
        &mut out,
        LEFT_COLUMN_X,
        COLUMN_TOP + 24.0,
        "Documents Flagged",
        model.content_flagged,
        FLAGGED_FILL,
        "Lower is better - less content to review",
    );
    render_progress(
        &mut out,
        LEFT_COLUMN_X,
        COLUMN_TOP + 96.0,
        "Important Items Found",
        model.items_found,
        FOUND_FILL,
        "Higher is better - finds more important content",
    );

    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"14\" font-weight=\"500\">In Practice</text>\n",
        fmt_coord(RIGHT_COLUMN_X),
        fmt_coord(COLUMN_TOP)
    );
    render_grid(&mut out, &counts, baseline);
    render_legend(&mut out, &counts);

    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#eeeeee\"/>\n",
        fmt_coord(LEFT_COLUMN_X),
        fmt_coord(HEIGHT - 40.0),
        fmt_coord(WIDTH - LEFT_COLUMN_X),
        fmt_coord(HEIGHT - 40.0)
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"13\">{}</text>\n",
        fmt_coord(LEFT_COLUMN_X),
        fmt_coord(HEIGHT - 18.0),
        xml_escape(&bottom_line(&counts, baseline))
    );

    out.push_str("</svg>\n");
    out
}

fn render_progress(
    out: &mut String,
    x: f64,
    y: f64,
    label: &str,
    value: f64,
    fill: &str,
    caption: &str,
) {
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"12\">{}</text>\n",
        fmt_coord(x),
        fmt_coord(y),
        xml_escape(label)
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"12\" font-weight=\"600\" \
         text-anchor=\"end\">{}%</text>\n",
        fmt_coord(x + PROGRESS_WIDTH),
        fmt_coord(y),
        fmt_percent(value)
    );
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{PROGRESS_WIDTH}\" height=\"{PROGRESS_HEIGHT}\" \
         rx=\"6\" fill=\"#e0e0e0\"/>\n",
        fmt_coord(x),
        fmt_coord(y + 6.0)
    );
    let fill_width = PROGRESS_WIDTH * (value / 100.0).clamp(0.0, 1.0);
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{PROGRESS_HEIGHT}\" rx=\"6\" \
         fill=\"{fill}\"/>\n",
        fmt_coord(x),
        fmt_coord(y + 6.0),
        fmt_coord(fill_width)
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{AXIS_TEXT}\">{}</text>\n",
        fmt_coord(x),
        fmt_coord(y + 32.0),
        xml_escape(caption)
    );
}

fn render_grid(out: &mut String, counts: &OutcomeCounts, baseline: &ReviewBaseline) {
    for i in 0..GRID_CELLS {
        let col = i % GRID_COLUMNS;
        let row = i / GRID_COLUMNS;
        let x = RIGHT_COLUMN_X + f64::from(col) * (CELL_SIZE + CELL_GAP);
        let y = COLUMN_TOP + 12.0 + f64::from(row) * (CELL_SIZE + CELL_GAP);
        let color = cell_color(i, counts.flagged, counts.found, baseline.high_priority_count);
        let _ = write!(
            out,
            "<rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{CELL_SIZE}\" \
             height=\"{CELL_SIZE}\" rx=\"2\" fill=\"{}\"/>\n",
            fmt_coord(x),
            fmt_coord(y),
            cell_fill(color)
        );
    }
}

fn render_legend(out: &mut String, counts: &OutcomeCounts) {
    let entries = [
        (cell_fill(CellColor::Found), "Found", counts.found),
        (cell_fill(CellColor::Missed), "Missed", counts.missed),
        (
            cell_fill(CellColor::FalsePositive),
            "False positives",
            counts.false_positives,
        ),
    ];
    let y = COLUMN_TOP + 12.0 + 5.0 * (CELL_SIZE + CELL_GAP) + 16.0;
    let mut x = RIGHT_COLUMN_X;
    for (fill, label, count) in entries {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"10\" height=\"10\" fill=\"{fill}\"/>\n",
            fmt_coord(x),
            fmt_coord(y - 9.0)
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"{AXIS_TEXT}\">{label} ({count})</text>\n",
            fmt_coord(x + 14.0),
            fmt_coord(y)
        );
        x += 14.0 + 8.0 * label.len() as f64 + 30.0;
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/recommend.rs"]
mod tests;
