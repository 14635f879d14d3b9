use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{RiskChartError, RiskChartResult};

use super::validation::validate_config;

/// Panel geometry and text configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file; every field
/// except the viewport falls back to the dashboard defaults when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    /// Shown in the header while no real result is loaded. Rendered upper case.
    #[serde(default = "default_empty_hint")]
    pub empty_hint: String,
    #[serde(default = "default_baseline_series_name")]
    pub baseline_series_name: String,
    #[serde(default = "default_shocked_series_name")]
    pub shocked_series_name: String,
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    #[serde(default = "default_header_height_px")]
    pub header_height_px: f64,
    #[serde(default = "default_header_gap_px")]
    pub header_gap_px: f64,
    #[serde(default = "default_chart_margin_px")]
    pub chart_margin_px: f64,
    #[serde(default = "default_y_axis_width_px")]
    pub y_axis_width_px: f64,
    #[serde(default = "default_x_axis_height_px")]
    pub x_axis_height_px: f64,
    #[serde(default = "default_x_label_offset_px")]
    pub x_label_offset_px: f64,
    #[serde(default = "default_bar_gap_px")]
    pub bar_gap_px: f64,
    #[serde(default = "default_category_gap_ratio")]
    pub category_gap_ratio: f64,
    #[serde(default = "default_bar_corner_radius_px")]
    pub bar_corner_radius_px: f64,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_title_font_size_px")]
    pub title_font_size_px: f64,
    #[serde(default = "default_hint_font_size_px")]
    pub hint_font_size_px: f64,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_tooltip_font_size_px")]
    pub tooltip_font_size_px: f64,
}

impl Default for RiskChartConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl RiskChartConfig {
    /// Dashboard defaults at the given panel size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            title: default_title(),
            empty_hint: default_empty_hint(),
            baseline_series_name: default_baseline_series_name(),
            shocked_series_name: default_shocked_series_name(),
            padding_px: default_padding_px(),
            header_height_px: default_header_height_px(),
            header_gap_px: default_header_gap_px(),
            chart_margin_px: default_chart_margin_px(),
            y_axis_width_px: default_y_axis_width_px(),
            x_axis_height_px: default_x_axis_height_px(),
            x_label_offset_px: default_x_label_offset_px(),
            bar_gap_px: default_bar_gap_px(),
            category_gap_ratio: default_category_gap_ratio(),
            bar_corner_radius_px: default_bar_corner_radius_px(),
            y_tick_count: default_y_tick_count(),
            title_font_size_px: default_title_font_size_px(),
            hint_font_size_px: default_hint_font_size_px(),
            axis_font_size_px: default_axis_font_size_px(),
            tooltip_font_size_px: default_tooltip_font_size_px(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_bar_gap_px(mut self, bar_gap_px: f64) -> Self {
        self.bar_gap_px = bar_gap_px;
        self
    }

    #[must_use]
    pub fn with_category_gap_ratio(mut self, category_gap_ratio: f64) -> Self {
        self.category_gap_ratio = category_gap_ratio;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, y_tick_count: usize) -> Self {
        self.y_tick_count = y_tick_count;
        self
    }

    pub fn validate(&self) -> RiskChartResult<()> {
        validate_config(self)
    }

    pub fn to_json_pretty(&self) -> RiskChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RiskChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> RiskChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RiskChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(640, 300)
}

fn default_title() -> String {
    "Risk Distribution Delta".to_owned()
}

fn default_empty_hint() -> String {
    "Run simulation for current settings".to_owned()
}

fn default_baseline_series_name() -> String {
    "Baseline Risk".to_owned()
}

fn default_shocked_series_name() -> String {
    "Shocked Risk".to_owned()
}

fn default_padding_px() -> f64 {
    20.0
}

fn default_header_height_px() -> f64 {
    20.0
}

fn default_header_gap_px() -> f64 {
    16.0
}

fn default_chart_margin_px() -> f64 {
    5.0
}

fn default_y_axis_width_px() -> f64 {
    60.0
}

fn default_x_axis_height_px() -> f64 {
    30.0
}

fn default_x_label_offset_px() -> f64 {
    10.0
}

fn default_bar_gap_px() -> f64 {
    4.0
}

fn default_category_gap_ratio() -> f64 {
    0.1
}

fn default_bar_corner_radius_px() -> f64 {
    4.0
}

fn default_y_tick_count() -> usize {
    5
}

fn default_title_font_size_px() -> f64 {
    14.0
}

fn default_hint_font_size_px() -> f64 {
    10.0
}

fn default_axis_font_size_px() -> f64 {
    10.0
}

fn default_tooltip_font_size_px() -> f64 {
    12.0
}
