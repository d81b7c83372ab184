use crate::model::ModelMetric;

/// Fixed review population the recommendation panel is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewBaseline {
    pub total_documents: u32,
    pub high_priority_count: u32,
}

impl Default for ReviewBaseline {
    fn default() -> Self {
        Self {
            total_documents: 100,
            high_priority_count: 15,
        }
    }
}

/// Round-half-up for non-negative percentages. 12.5 rounds to 13.
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

/// Integer counts derived from one model's percentages. `false_positives`
/// is clamped at zero; `clamped` records that the raw difference was
/// negative so callers can surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub found: u32,
    pub flagged: u32,
    pub missed: u32,
    pub false_positives: u32,
    pub clamped: bool,
}

impl ReviewBaseline {
    pub fn found_count(&self, items_found: f64) -> u32 {
        round_half_up(items_found / 100.0 * f64::from(self.high_priority_count))
    }

    pub fn flagged_count(&self, content_flagged: f64) -> u32 {
        round_half_up(content_flagged / 100.0 * f64::from(self.total_documents))
    }

    pub fn outcome(&self, model: &ModelMetric) -> OutcomeCounts {
        let found = self.found_count(model.items_found);
        let flagged = self.flagged_count(model.content_flagged);
        let missed = self.high_priority_count.saturating_sub(found);
        let clamped = found > flagged;
        if clamped {
            tracing::warn!(
                model = %model.name,
                found,
                flagged,
                "found count exceeds flagged count; clamping false positives to zero"
            );
        }
        OutcomeCounts {
            found,
            flagged,
            missed,
            false_positives: flagged.saturating_sub(found),
            clamped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Found,
    FalsePositive,
    Missed,
    Unflagged,
}

/// Color of cell `index` in the 100-cell pictographic grid. Flagged cells
/// split into found (within the high-priority set) and false positives;
/// unflagged cells inside the high-priority window are misses.
pub fn cell_color(
    index: u32,
    flagged_count: u32,
    found_count: u32,
    high_priority_count: u32,
) -> CellColor {
    if index < flagged_count {
        if index < found_count {
            CellColor::Found
        } else {
            CellColor::FalsePositive
        }
    } else if index < high_priority_count {
        CellColor::Missed
    } else {
        CellColor::Unflagged
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/baseline.rs"]
mod tests;
