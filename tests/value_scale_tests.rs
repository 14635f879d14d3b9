use approx::assert_relative_eq;
use risk_chart::RiskChartError;
use risk_chart::core::{PlotArea, ValueScale};

#[test]
fn placeholder_range_snaps_to_hundred_with_five_ticks() {
    let scale = ValueScale::from_values([60.0, 85.0, 55.0, 78.0, 20.0], 5).expect("scale");

    assert_eq!(scale.domain(), (0.0, 100.0));
    assert_eq!(scale.ticks(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn all_zero_values_use_unit_domain() {
    let scale = ValueScale::from_values([0.0, 0.0], 5).expect("scale");

    let (min, max) = scale.domain();
    assert_eq!(min, 0.0);
    assert_relative_eq!(max, 1.0, epsilon = 1e-12);
    let ticks = scale.ticks();
    assert_eq!(ticks.len(), 5);
    assert_relative_eq!(ticks[1], 0.25, epsilon = 1e-12);
}

#[test]
fn negative_values_extend_domain_below_zero() {
    let scale = ValueScale::from_values([-30.0, 40.0], 5).expect("scale");

    assert_eq!(scale.domain(), (-40.0, 40.0));
    assert_eq!(scale.ticks(), vec![-40.0, -20.0, 0.0, 20.0, 40.0]);
}

#[test]
fn domain_always_includes_zero() {
    let scale = ValueScale::from_values([120.0, 150.0], 5).expect("scale");
    let (min, max) = scale.domain();
    assert_eq!(min, 0.0);
    assert!(max >= 150.0);
}

#[test]
fn value_to_pixel_maps_larger_values_higher() {
    let scale = ValueScale::from_values([100.0], 5).expect("scale");
    let area = PlotArea::new(0.0, 10.0, 100.0, 200.0);

    assert_relative_eq!(scale.value_to_pixel(0.0, area).expect("px"), 210.0);
    assert_relative_eq!(scale.value_to_pixel(100.0, area).expect("px"), 10.0);
    assert_relative_eq!(scale.value_to_pixel(50.0, area).expect("px"), 110.0);
}

#[test]
fn pixel_to_value_inverts_value_to_pixel() {
    let scale = ValueScale::from_values([85.0], 5).expect("scale");
    let area = PlotArea::new(85.0, 61.0, 530.0, 184.0);

    let px = scale.value_to_pixel(42.0, area).expect("px");
    assert_relative_eq!(scale.pixel_to_value(px, area).expect("value"), 42.0, epsilon = 1e-9);
}

#[test]
fn rejects_non_finite_values_and_bad_tick_counts() {
    let err = ValueScale::from_values([f64::NAN], 5).expect_err("nan must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));

    let err = ValueScale::from_values([1.0], 1).expect_err("tick count < 2 must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}

#[test]
fn value_to_pixel_rejects_degenerate_area() {
    let scale = ValueScale::from_values([1.0], 5).expect("scale");
    let err = scale
        .value_to_pixel(0.5, PlotArea::new(0.0, 0.0, 100.0, 0.0))
        .expect_err("zero-height area must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}

#[test]
fn overflowing_domain_is_rejected_instead_of_panicking() {
    let err = ValueScale::from_values([1.7e308], 5).expect_err("overflowing domain must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));

    let err =
        ValueScale::from_values([-1.0e308, 1.0e308], 5).expect_err("overflowing span must fail");
    assert!(matches!(err, RiskChartError::InvalidData(_)));
}

#[test]
fn subnormal_values_fall_back_to_unit_domain() {
    let scale = ValueScale::from_values([5e-324], 5).expect("scale");

    let (min, max) = scale.domain();
    assert_eq!(min, 0.0);
    assert_relative_eq!(max, 1.0, epsilon = 1e-12);
    assert_eq!(scale.ticks().len(), 5);
}

#[test]
fn tick_count_stays_within_requested_bound() {
    for values in [[0.1, 99.9], [-0.1, 0.1], [-37.0, 1234.5], [3.0, 3.0]] {
        let scale = ValueScale::from_values(values, 5).expect("scale");
        let ticks = scale.ticks();
        assert!(ticks.len() >= 2 && ticks.len() <= 7, "{values:?} -> {ticks:?}");
    }
}
