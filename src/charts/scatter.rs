use std::fmt::Write;

use crate::charts::{LinearScale, fmt_coord, fmt_percent, xml_escape};
use crate::model::palette::{AXIS_TEXT, BASELINE_LINE, GRID_LINE, point_color};
use crate::model::{MetricsDataset, ModelMetric};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 56.0;
const POINT_RADIUS: f64 = 8.0;

/// Fixed axis domains: flagged share on x, found share on y.
pub const X_DOMAIN: (f64, f64) = (0.0, 40.0);
pub const Y_DOMAIN: (f64, f64) = (0.0, 100.0);

/// No-skill baseline in data space. The drawn segment is clipped to the
/// plot area, but the defining endpoints never move.
pub const DIAGONAL_START: (f64, f64) = (0.0, 0.0);
pub const DIAGONAL_END: (f64, f64) = (100.0, 100.0);

pub const DIAGONAL_LABEL: &str = "Random Selection";

pub fn scatter_tooltip(model: &ModelMetric) -> String {
    format!(
        "{}\nFlags {}% of content\nFinds {}% of important items",
        model.name,
        fmt_percent(model.flagged),
        fmt_percent(model.found)
    )
}

/// Scatter plot of flagged% (x) vs found% (y), one palette-colored point
/// per model with an adjacent name label.
pub fn render_scatter(dataset: &MetricsDataset) -> String {
    let plot_left = MARGIN_LEFT;
    let plot_right = WIDTH - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let x_scale = LinearScale::new(X_DOMAIN, (plot_left, plot_right));
    let y_scale = LinearScale::new(Y_DOMAIN, (plot_bottom, plot_top));

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
    );

    for tick in (0..=100).step_by(20) {
        let y = y_scale.position(f64::from(tick));
        let _ = write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{GRID_LINE}\" \
             stroke-dasharray=\"3 3\"/>\n",
            fmt_coord(plot_left),
            fmt_coord(y),
            fmt_coord(plot_right),
            fmt_coord(y)
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{AXIS_TEXT}\" \
             text-anchor=\"end\">{tick}</text>\n",
            fmt_coord(plot_left - 6.0),
            fmt_coord(y + 3.0)
        );
    }
    for tick in (0..=40).step_by(10) {
        let x = x_scale.position(f64::from(tick));
        let _ = write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{GRID_LINE}\" \
             stroke-dasharray=\"3 3\"/>\n",
            fmt_coord(x),
            fmt_coord(plot_top),
            fmt_coord(x),
            fmt_coord(plot_bottom)
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{AXIS_TEXT}\" \
             text-anchor=\"middle\">{tick}</text>\n",
            fmt_coord(x),
            fmt_coord(plot_bottom + 16.0)
        );
    }

    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"{AXIS_TEXT}\" \
         text-anchor=\"middle\">Content Flagged (%)</text>\n",
        fmt_coord((plot_left + plot_right) / 2.0),
        fmt_coord(HEIGHT - 16.0)
    );
    let _ = write!(
        out,
        "<text x=\"16\" y=\"{}\" font-size=\"12\" fill=\"{AXIS_TEXT}\" text-anchor=\"middle\" \
         transform=\"rotate(-90 16 {})\">Important Items Found (%)</text>\n",
        fmt_coord((plot_top + plot_bottom) / 2.0),
        fmt_coord((plot_top + plot_bottom) / 2.0)
    );

    // The y = x diagonal leaves the plot at the x-domain edge.
    let clip_x = DIAGONAL_END.0.min(X_DOMAIN.1);
    let clip_y = clip_x.min(Y_DOMAIN.1);
    let _ = write!(
        out,
        "<line class=\"baseline\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
         stroke=\"{BASELINE_LINE}\" stroke-dasharray=\"5 5\"/>\n",
        fmt_coord(x_scale.position(DIAGONAL_START.0)),
        fmt_coord(y_scale.position(DIAGONAL_START.1)),
        fmt_coord(x_scale.position(clip_x)),
        fmt_coord(y_scale.position(clip_y))
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{AXIS_TEXT}\" \
         text-anchor=\"end\">{DIAGONAL_LABEL}</text>\n",
        fmt_coord(x_scale.position(clip_x) - 4.0),
        fmt_coord(y_scale.position(clip_y) - 6.0)
    );

    for (i, model) in dataset.models.iter().enumerate() {
        let cx = x_scale.position(model.flagged);
        let cy = y_scale.position(model.found);
        let _ = write!(
            out,
            "<circle class=\"point\" cx=\"{}\" cy=\"{}\" r=\"{POINT_RADIUS}\" \
             fill=\"{}\"><title>{}</title></circle>\n",
            fmt_coord(cx),
            fmt_coord(cy),
            point_color(i),
            xml_escape(&scatter_tooltip(model))
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"#333333\" \
             text-anchor=\"start\">{}</text>\n",
            fmt_coord(cx + POINT_RADIUS + 2.0),
            fmt_coord(cy + 4.0),
            xml_escape(&model.name)
        );
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/scatter.rs"]
mod tests;
