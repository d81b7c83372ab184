use std::path::Path;

use serde::Deserialize;

use crate::model::{MetricsDataset, MetricsError, ModelMetric};

/// On-disk dataset shape. `found` defaults to `coverage`, and the
/// recommendation-panel fields default to their chart counterparts, so a
/// minimal file only needs name/efficiency/coverage/flagged per model.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    models: Vec<RawModel>,
    #[serde(default)]
    recommended_model: Option<String>,
    #[serde(default)]
    high_priority_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    name: String,
    efficiency: f64,
    coverage: f64,
    flagged: f64,
    #[serde(default)]
    found: Option<f64>,
    #[serde(default)]
    content_flagged: Option<f64>,
    #[serde(default)]
    items_found: Option<f64>,
}

#[derive(Debug)]
pub struct LoadedInput {
    pub dataset: MetricsDataset,
    pub recommended_model: Option<String>,
    pub high_priority_total: Option<u32>,
}

pub fn load_dataset(path: &Path) -> Result<LoadedInput, MetricsError> {
    let raw = std::fs::read_to_string(path)?;
    let file: DatasetFile = serde_json::from_str(&raw)?;
    let models = file
        .models
        .into_iter()
        .map(|raw| {
            let found = raw.found.unwrap_or(raw.coverage);
            ModelMetric {
                content_flagged: raw.content_flagged.unwrap_or(raw.flagged),
                items_found: raw.items_found.unwrap_or(found),
                name: raw.name,
                efficiency: raw.efficiency,
                coverage: raw.coverage,
                flagged: raw.flagged,
                found,
            }
        })
        .collect();
    let dataset = MetricsDataset::new(models)?;
    tracing::info!(
        path = %path.display(),
        models = dataset.models.len(),
        "loaded metrics dataset"
    );
    Ok(LoadedInput {
        dataset,
        recommended_model: file.recommended_model,
        high_priority_total: file.high_priority_total,
    })
}

/// Pick the model to highlight: the named one when it exists, otherwise
/// the first model in display order.
pub fn resolve_recommended<'a>(
    dataset: &'a MetricsDataset,
    name: Option<&str>,
) -> Option<&'a ModelMetric> {
    if let Some(name) = name {
        if let Some(model) = dataset.by_name(name) {
            return Some(model);
        }
        tracing::warn!(
            requested = name,
            "recommended model not in dataset; falling back to first model"
        );
    }
    dataset.models.first()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
