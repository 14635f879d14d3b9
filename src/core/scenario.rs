use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RiskChartError, RiskChartResult};

/// One pre-computed sector record of a shock-scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResultSector {
    #[serde(deserialize_with = "deserialize_sector_id")]
    pub sector_id: String,
    pub sector_name: String,
    pub risk_score: f64,
    pub risk_delta: f64,
}

impl ScenarioResultSector {
    #[must_use]
    pub fn new(
        sector_id: impl Into<String>,
        sector_name: impl Into<String>,
        risk_score: f64,
        risk_delta: f64,
    ) -> Self {
        Self {
            sector_id: sector_id.into(),
            sector_name: sector_name.into(),
            risk_score,
            risk_delta,
        }
    }
}

/// Output of one scenario simulation, sectors in engine order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioResult {
    #[serde(default)]
    pub sectors: Vec<ScenarioResultSector>,
}

impl ScenarioResult {
    #[must_use]
    pub fn new(sectors: Vec<ScenarioResultSector>) -> Self {
        Self { sectors }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn from_json_str(input: &str) -> RiskChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            RiskChartError::InvalidData(format!("failed to parse scenario result json: {e}"))
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "sector_id as a string or a number")]
enum RawSectorId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

// Engines emit HS-style ids either as "72" or as 72.
fn deserialize_sector_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawSectorId::deserialize(deserializer)? {
        RawSectorId::Text(id) => id,
        RawSectorId::Integer(id) => id.to_string(),
        RawSectorId::Unsigned(id) => id.to_string(),
        // 72.0 names the same sector as 72.
        RawSectorId::Float(id) if id.fract() == 0.0 && id.abs() < 1e15 => format!("{id:.0}"),
        RawSectorId::Float(id) => id.to_string(),
    })
}
