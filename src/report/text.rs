use crate::charts::bars::{comparison_note, coverage_sentence, efficiency_sentence, flagged_sentence};
use crate::charts::fmt_percent;
use crate::charts::recommend::{banner_sentence, bottom_line};
use crate::report::DashboardInput;

pub fn render_summary_text(input: &DashboardInput<'_>) -> String {
    let mut out = String::new();

    out.push_str("Moderation Model Comparison Report\n");
    out.push_str("==================================\n\n");

    out.push_str("1. Recommendation\n");
    match input.recommended {
        Some(model) => {
            let counts = input.baseline.outcome(model);
            out.push_str(&format!("Recommended model: {}\n", model.name));
            out.push_str(&format!("{}\n", banner_sentence(model)));
            out.push_str(&format!("{}\n", bottom_line(&counts, &input.baseline)));
            if counts.clamped {
                out.push_str(
                    "Note: found count exceeds flagged count; false positives reported as 0.\n",
                );
            }
        }
        None => out.push_str("No models in dataset.\n"),
    }
    out.push('\n');

    out.push_str("2. Efficiency\n");
    for model in &input.dataset.models {
        out.push_str(&format!(
            "{}: {} ({})\n",
            model.name,
            efficiency_sentence(model),
            flagged_sentence(model).to_lowercase()
        ));
    }
    out.push('\n');

    out.push_str("3. Coverage\n");
    for model in &input.dataset.models {
        out.push_str(&format!(
            "{}: {}\n",
            model.name,
            coverage_sentence(model)
        ));
    }
    out.push('\n');

    out.push_str("4. Selectivity\n");
    for model in &input.dataset.models {
        out.push_str(&format!(
            "{} flags {}% of content and finds {}% of important items (review savings {}%)\n",
            model.name,
            fmt_percent(model.flagged),
            fmt_percent(model.found),
            fmt_percent(model.review_savings())
        ));
    }
    out.push_str("Better models flag less content while finding more important items.\n");
    if let Some(note) = comparison_note(input.dataset) {
        out.push_str(&format!("Conclusion: {note}\n"));
    }

    out
}
