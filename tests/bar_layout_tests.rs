use approx::assert_relative_eq;
use risk_chart::RiskChartError;
use risk_chart::core::{
    ChartRow, PlotArea, ValueScale, category_index_at, placeholder_rows, project_grouped_bars,
};

fn scale_for(rows: &[ChartRow]) -> ValueScale {
    ValueScale::from_values(rows.iter().flat_map(|r| [r.baseline, r.shocked]), 5).expect("scale")
}

#[test]
fn single_category_splits_inner_band_into_two_bars() {
    let rows = vec![ChartRow::new("A", 50.0, 100.0)];
    let area = PlotArea::new(0.0, 0.0, 100.0, 100.0);

    let groups = project_grouped_bars(&rows, &scale_for(&rows), area, 4.0, 0.1).expect("layout");
    assert_eq!(groups.len(), 1);
    let g = groups[0];

    assert_relative_eq!(g.center_x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(g.baseline.x_left, 10.0, epsilon = 1e-9);
    assert_relative_eq!(g.baseline.x_right, 48.0, epsilon = 1e-9);
    assert_relative_eq!(g.shocked.x_left, 52.0, epsilon = 1e-9);
    assert_relative_eq!(g.shocked.x_right, 90.0, epsilon = 1e-9);

    assert_relative_eq!(g.baseline.y_top, 50.0, epsilon = 1e-9);
    assert_relative_eq!(g.baseline.y_bottom, 100.0, epsilon = 1e-9);
    assert_relative_eq!(g.shocked.y_top, 0.0, epsilon = 1e-9);
    assert_relative_eq!(g.shocked.y_bottom, 100.0, epsilon = 1e-9);
}

#[test]
fn bands_tile_the_plot_width_in_row_order() {
    let rows = placeholder_rows();
    let area = PlotArea::new(85.0, 61.0, 530.0, 184.0);

    let groups = project_grouped_bars(&rows, &scale_for(&rows), area, 4.0, 0.1).expect("layout");
    assert_eq!(groups.len(), rows.len());
    assert_relative_eq!(groups[0].band_left, area.left, epsilon = 1e-9);
    assert_relative_eq!(groups[5].band_right, area.right(), epsilon = 1e-9);
    for pair in groups.windows(2) {
        assert!(pair[0].center_x < pair[1].center_x);
        assert_relative_eq!(pair[0].band_right, pair[1].band_left, epsilon = 1e-9);
    }
}

#[test]
fn taller_value_produces_taller_bar() {
    let rows = vec![ChartRow::new("Auto", 60.0, 85.0)];
    let area = PlotArea::new(0.0, 0.0, 200.0, 200.0);

    let g = project_grouped_bars(&rows, &scale_for(&rows), area, 4.0, 0.1).expect("layout")[0];
    assert!(g.shocked.height() > g.baseline.height());
    assert_relative_eq!(g.baseline.width(), g.shocked.width(), epsilon = 1e-9);
}

#[test]
fn negative_values_hang_below_zero_line() {
    let rows = vec![ChartRow::new("Neg", -20.0, 40.0)];
    let area = PlotArea::new(0.0, 0.0, 100.0, 100.0);
    let scale = scale_for(&rows);
    let zero_y = scale.value_to_pixel(0.0, area).expect("zero");

    let g = project_grouped_bars(&rows, &scale, area, 4.0, 0.1).expect("layout")[0];
    assert_relative_eq!(g.baseline.y_top, zero_y, epsilon = 1e-9);
    assert!(g.baseline.y_bottom > zero_y);
    assert_relative_eq!(g.shocked.y_bottom, zero_y, epsilon = 1e-9);
}

#[test]
fn empty_rows_project_to_nothing() {
    let scale = ValueScale::from_values([1.0], 5).expect("scale");
    let groups = project_grouped_bars(&[], &scale, PlotArea::new(0.0, 0.0, 10.0, 10.0), 4.0, 0.1)
        .expect("layout");
    assert!(groups.is_empty());
}

#[test]
fn rejects_invalid_gap_settings() {
    let rows = vec![ChartRow::new("A", 1.0, 2.0)];
    let scale = scale_for(&rows);
    let area = PlotArea::new(0.0, 0.0, 100.0, 100.0);

    let err = project_grouped_bars(&rows, &scale, area, -1.0, 0.1).expect_err("negative gap");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
    let err = project_grouped_bars(&rows, &scale, area, 4.0, 0.5).expect_err("ratio too large");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}

#[test]
fn category_index_at_resolves_bands() {
    let area = PlotArea::new(100.0, 0.0, 600.0, 100.0);

    assert_eq!(category_index_at(100.0, area, 6), Some(0));
    assert_eq!(category_index_at(250.0, area, 6), Some(1));
    assert_eq!(category_index_at(700.0, area, 6), Some(5));
    assert_eq!(category_index_at(99.0, area, 6), None);
    assert_eq!(category_index_at(701.0, area, 6), None);
    assert_eq!(category_index_at(300.0, area, 0), None);
}
