use serde::Serialize;

use crate::report::DashboardInput;

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: ToolMeta<'a>,
    baseline: BaselineJson,
    models: Vec<ModelJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<RecommendationJson<'a>>,
}

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct BaselineJson {
    total_documents: u32,
    high_priority_count: u32,
}

#[derive(Debug, Serialize)]
struct ModelJson<'a> {
    name: &'a str,
    efficiency: f64,
    coverage: f64,
    flagged: f64,
    found: f64,
    review_savings: f64,
}

#[derive(Debug, Serialize)]
struct RecommendationJson<'a> {
    name: &'a str,
    found_count: u32,
    flagged_count: u32,
    missed: u32,
    false_positives: u32,
    false_positives_clamped: bool,
}

pub fn render_summary_json(input: &DashboardInput<'_>) -> Result<String, serde_json::Error> {
    let recommendation = input.recommended.map(|model| {
        let counts = input.baseline.outcome(model);
        RecommendationJson {
            name: &model.name,
            found_count: counts.found,
            flagged_count: counts.flagged,
            missed: counts.missed,
            false_positives: counts.false_positives,
            false_positives_clamped: counts.clamped,
        }
    });
    let summary = SummaryJson {
        tool: ToolMeta {
            name: input.tool_name,
            version: input.tool_version,
        },
        baseline: BaselineJson {
            total_documents: input.baseline.total_documents,
            high_priority_count: input.baseline.high_priority_count,
        },
        models: input
            .dataset
            .models
            .iter()
            .map(|m| ModelJson {
                name: &m.name,
                efficiency: m.efficiency,
                coverage: m.coverage,
                flagged: m.flagged,
                found: m.found,
                review_savings: m.review_savings(),
            })
            .collect(),
        recommendation,
    };
    serde_json::to_string_pretty(&summary)
}
