use std::fmt::Write;

use crate::charts::{LinearScale, fmt_coord, fmt_percent, xml_escape};
use crate::model::palette::{AXIS_TEXT, COVERAGE_BAR, EFFICIENCY_BAR, GRID_LINE};
use crate::model::{MetricsDataset, ModelMetric};

const PANEL_WIDTH: f64 = 360.0;
const PANEL_GAP: f64 = 40.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 52.0;
const MARGIN_BOTTOM: f64 = 48.0;
const BAR_WIDTH: f64 = 40.0;

/// The bar charts always span the full percent range regardless of data.
pub const Y_DOMAIN: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMetric {
    Efficiency,
    Coverage,
}

impl BarMetric {
    pub fn label(self) -> &'static str {
        match self {
            BarMetric::Efficiency => "Efficiency",
            BarMetric::Coverage => "Coverage",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BarMetric::Efficiency => "% of flagged items that are actually important",
            BarMetric::Coverage => "% of important items found",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            BarMetric::Efficiency => "Higher is better - less wasted effort",
            BarMetric::Coverage => "Higher is better - fewer missed items",
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            BarMetric::Efficiency => EFFICIENCY_BAR,
            BarMetric::Coverage => COVERAGE_BAR,
        }
    }

    pub fn value(self, model: &ModelMetric) -> f64 {
        match self {
            BarMetric::Efficiency => model.efficiency,
            BarMetric::Coverage => model.coverage,
        }
    }
}

pub fn efficiency_sentence(model: &ModelMetric) -> String {
    format!(
        "{}% of flagged items are important",
        fmt_percent(model.efficiency)
    )
}

pub fn coverage_sentence(model: &ModelMetric) -> String {
    format!("Finds {}% of important items", fmt_percent(model.coverage))
}

pub fn flagged_sentence(model: &ModelMetric) -> String {
    format!("Flags {}% of all content", fmt_percent(model.flagged))
}

/// Tooltip body for one bar: model name, flagged share, and the
/// metric-specific sentence.
pub fn bar_tooltip(model: &ModelMetric, metric: BarMetric) -> String {
    let detail = match metric {
        BarMetric::Efficiency => efficiency_sentence(model),
        BarMetric::Coverage => coverage_sentence(model),
    };
    format!("{}\n{}\n{}", model.name, flagged_sentence(model), detail)
}

/// Footnote naming the strongest model, or None for an empty dataset.
pub fn comparison_note(dataset: &MetricsDataset) -> Option<String> {
    let best_eff = dataset
        .models
        .iter()
        .max_by(|a, b| a.efficiency.total_cmp(&b.efficiency))?;
    let best_cov = dataset
        .models
        .iter()
        .max_by(|a, b| a.coverage.total_cmp(&b.coverage))?;
    Some(if best_eff.name == best_cov.name {
        format!(
            "{} is most efficient ({}%) while still finding the most important items ({}%).",
            best_eff.name,
            fmt_percent(best_eff.efficiency),
            fmt_percent(best_eff.coverage)
        )
    } else {
        format!(
            "{} is most efficient ({}%); {} finds the most important items ({}%).",
            best_eff.name,
            fmt_percent(best_eff.efficiency),
            best_cov.name,
            fmt_percent(best_cov.coverage)
        )
    })
}

/// Two parallel bar charts (efficiency, coverage) in one SVG document.
/// An empty dataset renders axes only.
pub fn render_side_by_side(dataset: &MetricsDataset) -> String {
    let width = PANEL_WIDTH * 2.0 + PANEL_GAP;
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {width} {HEIGHT}\" font-family=\"sans-serif\">\n"
    );
    render_panel(&mut out, &dataset.models, BarMetric::Efficiency, 0.0);
    render_panel(
        &mut out,
        &dataset.models,
        BarMetric::Coverage,
        PANEL_WIDTH + PANEL_GAP,
    );
    out.push_str("</svg>\n");
    out
}

fn render_panel(out: &mut String, models: &[ModelMetric], metric: BarMetric, origin_x: f64) {
    let plot_left = origin_x + MARGIN_LEFT;
    let plot_right = origin_x + PANEL_WIDTH - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let y_scale = LinearScale::new(Y_DOMAIN, (plot_bottom, plot_top));

    let _ = write!(
        out,
        "<text x=\"{}\" y=\"20\" font-size=\"16\" font-weight=\"600\">{}</text>\n",
        fmt_coord(origin_x + MARGIN_LEFT),
        metric.label()
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"38\" font-size=\"11\" fill=\"{AXIS_TEXT}\">{}</text>\n",
        fmt_coord(origin_x + MARGIN_LEFT),
        metric.description()
    );

    // Gridlines and y tick labels every 20%.
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
             text-anchor=\"end\">{tick}%</text>\n",
            fmt_coord(plot_left - 6.0),
            fmt_coord(y + 3.0)
        );
    }

    if models.is_empty() {
        return;
    }

    let slot = (plot_right - plot_left) / models.len() as f64;
    for (i, model) in models.iter().enumerate() {
        let value = metric.value(model);
        let center = plot_left + slot * (i as f64 + 0.5);
        let x = center - BAR_WIDTH / 2.0;
        let top = y_scale.position(value);
        let height = plot_bottom - top;
        let _ = write!(
            out,
            "<rect class=\"bar\" x=\"{}\" y=\"{}\" width=\"{BAR_WIDTH}\" height=\"{}\" \
             rx=\"4\" fill=\"{}\"><title>{}</title></rect>\n",
            fmt_coord(x),
            fmt_coord(top),
            fmt_coord(height),
            metric.fill(),
            xml_escape(&bar_tooltip(model, metric))
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"11\" text-anchor=\"middle\">{}</text>\n",
            fmt_coord(center),
            fmt_coord(plot_bottom + 16.0),
            xml_escape(&model.name)
        );
    }

    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{AXIS_TEXT}\" \
         text-anchor=\"middle\">{}</text>\n",
        fmt_coord(origin_x + PANEL_WIDTH / 2.0),
        fmt_coord(HEIGHT - 10.0),
        metric.caption()
    );
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/bars.rs"]
mod tests;
