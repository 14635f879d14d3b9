use crate::render::Color;

/// Colors for every primitive the risk panel emits.
///
/// Defaults follow the dark dashboard theme: translucent white chrome on a
/// near-black page, rose shocked bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskChartStyle {
    pub page_background_color: Color,
    pub panel_fill_color: Color,
    pub panel_border_color: Color,
    pub panel_border_width_px: f64,
    pub panel_corner_radius_px: f64,
    pub title_color: Color,
    pub hint_color: Color,
    pub grid_line_color: Color,
    pub grid_dash_px: f64,
    pub grid_gap_px: f64,
    pub axis_label_color: Color,
    pub baseline_bar_color: Color,
    pub shocked_bar_color: Color,
    pub cursor_color: Color,
    pub tooltip_background_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_corner_radius_px: f64,
}

impl Default for RiskChartStyle {
    fn default() -> Self {
        Self {
            page_background_color: Color::rgba8(5, 5, 5, 1.0),
            panel_fill_color: Color::rgba8(255, 255, 255, 0.02),
            panel_border_color: Color::rgba8(255, 255, 255, 0.05),
            panel_border_width_px: 1.0,
            panel_corner_radius_px: 16.0,
            title_color: Color::rgba8(255, 255, 255, 0.9),
            hint_color: Color::rgba8(255, 255, 255, 0.4),
            grid_line_color: Color::rgba8(255, 255, 255, 0.05),
            grid_dash_px: 3.0,
            grid_gap_px: 3.0,
            axis_label_color: Color::rgba8(255, 255, 255, 0.4),
            baseline_bar_color: Color::rgba8(255, 255, 255, 0.1),
            shocked_bar_color: Color::rgba8(244, 63, 94, 0.8),
            cursor_color: Color::rgba8(255, 255, 255, 0.02),
            tooltip_background_color: Color::rgba8(10, 10, 10, 1.0),
            tooltip_border_color: Color::rgba8(255, 255, 255, 0.1),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_corner_radius_px: 8.0,
        }
    }
}
