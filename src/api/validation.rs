use crate::error::{RiskChartError, RiskChartResult};

use super::{RiskChartConfig, RiskChartStyle, panel_layout::PanelLayout};

pub(super) const MIN_Y_TICK_COUNT: usize = 2;
pub(super) const MAX_Y_TICK_COUNT: usize = 20;

pub(super) fn validate_style(style: RiskChartStyle) -> RiskChartResult<()> {
    for color in [
        style.page_background_color,
        style.panel_fill_color,
        style.panel_border_color,
        style.title_color,
        style.hint_color,
        style.grid_line_color,
        style.axis_label_color,
        style.baseline_bar_color,
        style.shocked_bar_color,
        style.cursor_color,
        style.tooltip_background_color,
        style.tooltip_border_color,
        style.tooltip_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("panel border width", style.panel_border_width_px),
        ("panel corner radius", style.panel_corner_radius_px),
        ("tooltip corner radius", style.tooltip_corner_radius_px),
    ] {
        ensure_non_negative(name, value)?;
    }
    for (name, value) in [
        ("grid dash", style.grid_dash_px),
        ("grid gap", style.grid_gap_px),
    ] {
        ensure_positive(name, value)?;
    }

    Ok(())
}

pub(super) fn validate_config(config: &RiskChartConfig) -> RiskChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(RiskChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    for (name, value) in [
        ("padding", config.padding_px),
        ("header height", config.header_height_px),
        ("header gap", config.header_gap_px),
        ("chart margin", config.chart_margin_px),
        ("y axis width", config.y_axis_width_px),
        ("x axis height", config.x_axis_height_px),
        ("x label offset", config.x_label_offset_px),
        ("bar gap", config.bar_gap_px),
        ("bar corner radius", config.bar_corner_radius_px),
    ] {
        ensure_non_negative(name, value)?;
    }
    for (name, value) in [
        ("title font size", config.title_font_size_px),
        ("hint font size", config.hint_font_size_px),
        ("axis font size", config.axis_font_size_px),
        ("tooltip font size", config.tooltip_font_size_px),
    ] {
        ensure_positive(name, value)?;
    }

    if !config.category_gap_ratio.is_finite() || !(0.0..0.5).contains(&config.category_gap_ratio)
    {
        return Err(RiskChartError::InvalidConfig(
            "category gap ratio must be finite and in [0, 0.5)".to_owned(),
        ));
    }
    if !(MIN_Y_TICK_COUNT..=MAX_Y_TICK_COUNT).contains(&config.y_tick_count) {
        return Err(RiskChartError::InvalidConfig(format!(
            "y tick count must be in [{MIN_Y_TICK_COUNT}, {MAX_Y_TICK_COUNT}]"
        )));
    }

    let layout = PanelLayout::resolve(config);
    if !layout.plot.is_valid() {
        return Err(RiskChartError::InvalidConfig(format!(
            "viewport {}x{} leaves no room for the plot area",
            config.viewport.width, config.viewport.height
        )));
    }

    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> RiskChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RiskChartError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> RiskChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RiskChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}
