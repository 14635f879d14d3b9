#![cfg(feature = "cairo-backend")]

use risk_chart::RiskChartError;
use risk_chart::api::{RiskChart, RiskChartConfig};
use risk_chart::core::{ScenarioResult, ScenarioResultSector, Viewport};
use risk_chart::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 300).expect_err("invalid width must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_primitive_of_the_placeholder_panel() {
    let renderer = CairoRenderer::new(640, 300).expect("renderer");
    let mut chart =
        RiskChart::new(renderer, RiskChartConfig::new(Viewport::new(640, 300))).expect("chart");

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, 13);
    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.texts_drawn, 13);
}

#[test]
fn cairo_renderer_draws_hovered_result_and_writes_png() {
    let renderer = CairoRenderer::new(640, 300).expect("renderer");
    let mut chart =
        RiskChart::new(renderer, RiskChartConfig::new(Viewport::new(640, 300))).expect("chart");
    chart.set_scenario_result(Some(ScenarioResult::new(vec![
        ScenarioResultSector::new("A", "Automotive", 85.0, 25.0),
        ScenarioResultSector::new("S", "Steel", 78.0, 23.0),
    ])));
    let plot = chart.layout().plot;
    chart.pointer_move(plot.left + 10.0, plot.top + 10.0);

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    // panel + 4 bars + cursor + tooltip box
    assert_eq!(renderer.last_stats().rects_drawn, 7);

    let path = std::env::temp_dir().join("risk_chart_cairo_backend_test.png");
    renderer.write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(&path);
}
