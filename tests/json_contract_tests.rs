use risk_chart::RiskChartError;
use risk_chart::api::{
    CHART_ROWS_JSON_SCHEMA_V1, ChartRowsJsonContractV1, RiskChart, RiskChartConfig,
};
use risk_chart::core::{ChartData, ChartRow, ScenarioResult, ScenarioResultSector, chart_data};
use risk_chart::render::NullRenderer;

#[test]
fn rows_contract_v1_wraps_rows_with_schema_version() {
    let mut chart =
        RiskChart::new(NullRenderer::default(), RiskChartConfig::default()).expect("chart");
    chart.set_scenario_result(Some(ScenarioResult::new(vec![ScenarioResultSector::new(
        "A",
        "Automotive",
        85.0,
        25.0,
    )])));

    let json = chart.rows_json_contract_v1_pretty().expect("serialize");
    let payload: ChartRowsJsonContractV1 = serde_json::from_str(&json).expect("parse");

    assert_eq!(payload.schema_version, CHART_ROWS_JSON_SCHEMA_V1);
    assert!(payload.has_result);
    assert_eq!(payload.rows, vec![ChartRow::new("Automoti", 60.0, 85.0)]);
}

#[test]
fn compat_parser_reads_envelope_back() {
    let data = chart_data(None, None);
    let json = data.to_json_contract_v1_pretty().expect("serialize");

    let parsed = ChartData::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, data);
}

#[test]
fn compat_parser_accepts_bare_row_array() {
    let parsed = ChartData::from_json_compat_str(
        r#"[{"name": "Oil", "baseline": 40.0, "shocked": 45.0}]"#,
    )
    .expect("parse");

    assert_eq!(parsed.rows, vec![ChartRow::new("Oil", 40.0, 45.0)]);
    assert!(parsed.has_result);
}

#[test]
fn compat_parser_flags_bare_placeholder_rows() {
    let json = serde_json::to_string(&chart_data(None, None).rows).expect("serialize");
    let parsed = ChartData::from_json_compat_str(&json).expect("parse");
    assert!(!parsed.has_result);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let err = ChartData::from_json_compat_str(r#"{"schema_version": 2, "rows": []}"#)
        .expect_err("future schema must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}

#[test]
fn compat_parser_rejects_garbage() {
    let err = ChartData::from_json_compat_str("not json").expect_err("garbage must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}
