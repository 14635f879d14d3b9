use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ScenarioResult, ScenarioResultSector};

/// Maximum number of sector categories drawn in the chart.
pub const MAX_CHART_ROWS: usize = 8;
/// Maximum number of characters kept from a sector name for its axis label.
pub const MAX_LABEL_CHARS: usize = 8;

/// One chart category: baseline vs shocked risk for a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub name: String,
    pub baseline: f64,
    pub shocked: f64,
}

impl ChartRow {
    #[must_use]
    pub fn new(name: impl Into<String>, baseline: f64, shocked: f64) -> Self {
        Self {
            name: name.into(),
            baseline,
            shocked,
        }
    }
}

/// Mapper output plus whether it was derived from a real result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub rows: Vec<ChartRow>,
    pub has_result: bool,
}

const PLACEHOLDER_ROWS: [(&str, f64, f64); 6] = [
    ("Auto", 60.0, 85.0),
    ("Steel", 55.0, 78.0),
    ("Lumber", 65.0, 62.0),
    ("Oil", 40.0, 45.0),
    ("Agri", 30.0, 30.0),
    ("Tech", 20.0, 22.0),
];

/// Static dataset shown before any simulation has produced a result.
#[must_use]
pub fn placeholder_rows() -> Vec<ChartRow> {
    PLACEHOLDER_ROWS
        .iter()
        .map(|&(name, baseline, shocked)| ChartRow::new(name, baseline, shocked))
        .collect()
}

/// Returns `true` when `current` holds at least one sector.
#[must_use]
pub fn has_result(current: Option<&ScenarioResult>) -> bool {
    current.is_some_and(|result| !result.sectors.is_empty())
}

/// Maps a scenario result (and optional baseline run) to chart rows.
///
/// Absent or empty results fall back to `placeholder_rows`. Otherwise the
/// first `MAX_CHART_ROWS` sectors are kept in order; each baseline value comes
/// from the baseline run when it has the same sector id, else it is estimated
/// as `max(0, risk_score - risk_delta)`.
#[must_use]
pub fn result_to_chart_rows(
    current: Option<&ScenarioResult>,
    baseline: Option<&ScenarioResult>,
) -> Vec<ChartRow> {
    let Some(current) = current.filter(|result| !result.sectors.is_empty()) else {
        return placeholder_rows();
    };

    let baseline_scores = baseline_score_lookup(baseline);
    if current.sectors.len() > MAX_CHART_ROWS {
        warn!(
            sector_count = current.sectors.len(),
            kept = MAX_CHART_ROWS,
            "truncating scenario sectors for chart"
        );
    }

    current
        .sectors
        .iter()
        .take(MAX_CHART_ROWS)
        .map(|sector| ChartRow {
            name: truncate_label(&sector.sector_name),
            baseline: baseline_value(sector, &baseline_scores),
            shocked: sector.risk_score,
        })
        .collect()
}

/// Same as `result_to_chart_rows`, tagged with `has_result`.
#[must_use]
pub fn chart_data(
    current: Option<&ScenarioResult>,
    baseline: Option<&ScenarioResult>,
) -> ChartData {
    ChartData {
        rows: result_to_chart_rows(current, baseline),
        has_result: has_result(current),
    }
}

fn baseline_score_lookup(baseline: Option<&ScenarioResult>) -> HashMap<&str, f64> {
    let mut scores = HashMap::new();
    if let Some(baseline) = baseline {
        for sector in &baseline.sectors {
            scores.insert(sector.sector_id.as_str(), sector.risk_score);
        }
    }
    scores
}

fn baseline_value(sector: &ScenarioResultSector, baseline_scores: &HashMap<&str, f64>) -> f64 {
    match baseline_scores.get(sector.sector_id.as_str()) {
        Some(&score) => score,
        None => (sector.risk_score - sector.risk_delta).max(0.0),
    }
}

fn truncate_label(name: &str) -> String {
    name.chars().take(MAX_LABEL_CHARS).collect()
}
