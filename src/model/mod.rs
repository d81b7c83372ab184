pub mod baseline;
pub mod palette;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model {model}: {field} = {value} is outside 0..=100")]
    OutOfRange {
        model: String,
        field: &'static str,
        value: f64,
    },
    #[error("duplicate model name: {0}")]
    DuplicateName(String),
}

/// One model's triage metrics. All fields are percentages of a fixed
/// conceptual population; `content_flagged` and `items_found` usually
/// duplicate `flagged` and `found` but are kept separate because the
/// recommendation panel reads them independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetric {
    pub name: String,
    /// Fraction of flagged items that are actually important (precision-like).
    pub efficiency: f64,
    /// Fraction of important items found (recall-like).
    pub coverage: f64,
    /// Fraction of the total population flagged for review.
    pub flagged: f64,
    pub found: f64,
    pub content_flagged: f64,
    pub items_found: f64,
}

impl ModelMetric {
    pub fn validate(&self) -> Result<(), MetricsError> {
        check_percent(&self.name, "efficiency", self.efficiency)?;
        check_percent(&self.name, "coverage", self.coverage)?;
        check_percent(&self.name, "flagged", self.flagged)?;
        check_percent(&self.name, "found", self.found)?;
        check_percent(&self.name, "content_flagged", self.content_flagged)?;
        check_percent(&self.name, "items_found", self.items_found)?;
        Ok(())
    }

    /// Share of documents a reviewer can skip entirely.
    pub fn review_savings(&self) -> f64 {
        100.0 - self.flagged
    }
}

fn check_percent(model: &str, field: &'static str, value: f64) -> Result<(), MetricsError> {
    if !(0.0..=100.0).contains(&value) || value.is_nan() {
        return Err(MetricsError::OutOfRange {
            model: model.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

/// Ordered, validated collection of model metrics. Display order is
/// insertion order; an empty dataset is a valid "no data" state.
#[derive(Debug, Clone, Default)]
pub struct MetricsDataset {
    pub models: Vec<ModelMetric>,
}

impl MetricsDataset {
    pub fn new(models: Vec<ModelMetric>) -> Result<Self, MetricsError> {
        let dataset = Self { models };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), MetricsError> {
        for model in &self.models {
            model.validate()?;
        }
        for (i, model) in self.models.iter().enumerate() {
            if self.models[..i].iter().any(|m| m.name == model.name) {
                return Err(MetricsError::DuplicateName(model.name.clone()));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&ModelMetric> {
        self.models.iter().find(|m| m.name == name)
    }
}

struct BuiltinModel {
    name: &'static str,
    efficiency: f64,
    coverage: f64,
    flagged: f64,
    found: f64,
}

const BUILTIN_MODELS: &[BuiltinModel] = &[
    BuiltinModel {
        name: "Model A",
        efficiency: 98.0,
        coverage: 82.0,
        flagged: 12.5,
        found: 82.0,
    },
    BuiltinModel {
        name: "Model B",
        efficiency: 63.0,
        coverage: 69.0,
        flagged: 16.2,
        found: 68.5,
    },
    BuiltinModel {
        name: "Model C",
        efficiency: 25.0,
        coverage: 54.0,
        flagged: 32.5,
        found: 54.0,
    },
];

pub const BUILTIN_RECOMMENDED: &str = "Model A";

/// Reference dataset used when no input file is given.
pub fn builtin_dataset() -> MetricsDataset {
    let models = BUILTIN_MODELS
        .iter()
        .map(|b| ModelMetric {
            name: b.name.to_string(),
            efficiency: b.efficiency,
            coverage: b.coverage,
            flagged: b.flagged,
            found: b.found,
            content_flagged: b.flagged,
            items_found: b.found,
        })
        .collect();
    MetricsDataset { models }
}
