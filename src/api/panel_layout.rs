use crate::core::PlotArea;

use super::RiskChartConfig;

/// Resolved pixel regions of the panel for one config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub panel: PlotArea,
    /// Header row holding the title (left) and the hint (right).
    pub header: PlotArea,
    /// Chart box: plot plus its axis gutters and margins.
    pub chart: PlotArea,
    /// Region where bars and grid lines live.
    pub plot: PlotArea,
}

impl PanelLayout {
    #[must_use]
    pub fn resolve(config: &RiskChartConfig) -> Self {
        let width = f64::from(config.viewport.width);
        let height = f64::from(config.viewport.height);
        let padding = config.padding_px;
        let content_width = width - 2.0 * padding;

        let header = PlotArea::new(padding, padding, content_width, config.header_height_px);
        let chart_top = header.bottom() + config.header_gap_px;
        let chart = PlotArea::new(padding, chart_top, content_width, height - padding - chart_top);

        let margin = config.chart_margin_px;
        let plot_left = chart.left + margin + config.y_axis_width_px;
        let plot_top = chart.top + margin;
        let plot = PlotArea::new(
            plot_left,
            plot_top,
            chart.right() - margin - plot_left,
            chart.bottom() - margin - config.x_axis_height_px - plot_top,
        );

        Self {
            panel: PlotArea::new(0.0, 0.0, width, height),
            header,
            chart,
            plot,
        }
    }
}

pub(super) fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Backend-independent estimate; keeps layout deterministic in tests.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Axis and tooltip number text: integers without decimals, others trimmed to two.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
