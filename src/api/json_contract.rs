use serde::{Deserialize, Serialize};

use crate::core::{ChartData, ChartRow, placeholder_rows};
use crate::error::{RiskChartError, RiskChartResult};
use crate::render::Renderer;

use super::RiskChart;

pub const CHART_ROWS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRowsJsonContractV1 {
    pub schema_version: u32,
    #[serde(default)]
    pub has_result: bool,
    pub rows: Vec<ChartRow>,
}

impl ChartData {
    pub fn to_json_contract_v1_pretty(&self) -> RiskChartResult<String> {
        let payload = ChartRowsJsonContractV1 {
            schema_version: CHART_ROWS_JSON_SCHEMA_V1,
            has_result: self.has_result,
            rows: self.rows.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RiskChartError::InvalidData(format!("failed to serialize chart rows contract v1: {e}"))
        })
    }

    /// Accepts either a bare row array or the versioned envelope.
    ///
    /// A bare array carries no `has_result` flag; it is inferred as "not the
    /// placeholder dataset".
    pub fn from_json_compat_str(input: &str) -> RiskChartResult<Self> {
        if let Ok(rows) = serde_json::from_str::<Vec<ChartRow>>(input) {
            let has_result = rows != placeholder_rows();
            return Ok(Self { rows, has_result });
        }
        let payload: ChartRowsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            RiskChartError::InvalidData(format!("failed to parse chart rows json payload: {e}"))
        })?;
        if payload.schema_version != CHART_ROWS_JSON_SCHEMA_V1 {
            return Err(RiskChartError::InvalidData(format!(
                "unsupported chart rows schema version: {}",
                payload.schema_version
            )));
        }
        Ok(Self {
            rows: payload.rows,
            has_result: payload.has_result,
        })
    }
}

impl<R: Renderer> RiskChart<R> {
    pub fn rows_json_contract_v1_pretty(&self) -> RiskChartResult<String> {
        self.chart_data().to_json_contract_v1_pretty()
    }
}
