use std::fmt::Write;

use crate::charts::bars::{comparison_note, render_side_by_side};
use crate::charts::recommend::render_recommendation;
use crate::charts::{fmt_percent, xml_escape};
use crate::charts::scatter::render_scatter;
use crate::report::DashboardInput;

const PAGE_CSS: &str = "\
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 1000px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f5f5f5;
}
h1 { text-align: center; }
.section {
    margin-bottom: 30px;
    padding: 20px;
    background-color: #ffffff;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.12);
}
.section-title { font-size: 20px; font-weight: 600; margin-bottom: 12px; }
.note {
    font-size: 14px;
    color: #666;
    border-top: 1px solid #eee;
    padding-top: 10px;
    margin-top: 10px;
}
";

/// Self-contained dashboard page: recommendation panel on top, then the
/// side-by-side bar charts, then the scatter comparison.
pub fn render_dashboard_html(input: &DashboardInput<'_>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Model Performance Comparison</title>\n<style>\n{PAGE_CSS}</style>\n</head>\n\
         <body>\n<h1>Model Performance Comparison</h1>\n"
    );

    if let Some(model) = input.recommended {
        out.push_str("<div class=\"section\">\n");
        out.push_str(&render_recommendation(model, &input.baseline));
        out.push_str("</div>\n");
    }

    out.push_str("<div class=\"section\">\n");
    out.push_str("<div class=\"section-title\">Efficiency and Coverage</div>\n");
    out.push_str(&render_side_by_side(input.dataset));
    if let Some(note) = comparison_note(input.dataset) {
        let _ = write!(out, "<p class=\"note\">{}</p>\n", xml_escape(&note));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"section\">\n");
    out.push_str("<div class=\"section-title\">Finding Important Content</div>\n");
    out.push_str(&render_scatter(input.dataset));
    if !input.dataset.is_empty() {
        out.push_str(
            "<p class=\"note\"><strong>Better models</strong> appear higher and to the left: \
             they find more important items while flagging less content overall.</p>\n",
        );
    }
    if let Some(model) = input.recommended {
        let _ = write!(
            out,
            "<p class=\"note\"><strong>For example:</strong> {} flags just {}% of content \
             but finds {}% of important items.</p>\n",
            xml_escape(&model.name),
            fmt_percent(model.flagged),
            fmt_percent(model.found)
        );
    }
    out.push_str("</div>\n");

    let _ = write!(
        out,
        "<p class=\"note\">Generated by {} {}</p>\n</body>\n</html>\n",
        input.tool_name, input.tool_version
    );
    out
}
