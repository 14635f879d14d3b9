use tracing::{debug, trace};

use crate::core::{
    ChartData, ChartRow, ScenarioResult, category_index_at, chart_data, has_result,
};
use crate::error::RiskChartResult;
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_panel_frame;
use super::panel_layout::PanelLayout;
use super::tooltip::{ChartTooltip, HoverPoint};
use super::validation::validate_style;
use super::{RiskChartConfig, RiskChartStyle};

/// Facade consumed by host dashboards.
///
/// Holds the two optional inputs (current and baseline scenario results) and
/// the hover position; every frame is rebuilt from them on demand.
pub struct RiskChart<R: Renderer> {
    renderer: R,
    config: RiskChartConfig,
    style: RiskChartStyle,
    scenario_result: Option<ScenarioResult>,
    baseline_result: Option<ScenarioResult>,
    hover: Option<HoverPoint>,
}

impl<R: Renderer> RiskChart<R> {
    pub fn new(renderer: R, config: RiskChartConfig) -> RiskChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            style: RiskChartStyle::default(),
            scenario_result: None,
            baseline_result: None,
            hover: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RiskChartConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> RiskChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RiskChartStyle) -> RiskChartResult<()> {
        validate_style(style)?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn scenario_result(&self) -> Option<&ScenarioResult> {
        self.scenario_result.as_ref()
    }

    #[must_use]
    pub fn baseline_result(&self) -> Option<&ScenarioResult> {
        self.baseline_result.as_ref()
    }

    pub fn set_scenario_result(&mut self, result: Option<ScenarioResult>) {
        debug!(
            sectors = result.as_ref().map_or(0, |r| r.sectors.len()),
            "set scenario result"
        );
        self.scenario_result = result;
        self.hover = None;
    }

    pub fn set_baseline_result(&mut self, result: Option<ScenarioResult>) {
        debug!(
            sectors = result.as_ref().map_or(0, |r| r.sectors.len()),
            "set baseline result"
        );
        self.baseline_result = result;
        self.hover = None;
    }

    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        chart_data(self.scenario_result.as_ref(), self.baseline_result.as_ref())
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ChartRow> {
        self.chart_data().rows
    }

    /// `false` while the placeholder dataset is shown.
    #[must_use]
    pub fn has_result(&self) -> bool {
        has_result(self.scenario_result.as_ref())
    }

    #[must_use]
    pub fn layout(&self) -> PanelLayout {
        PanelLayout::resolve(&self.config)
    }

    /// Updates hover from a pointer position; returns the hovered category.
    ///
    /// Positions outside the plot area clear the hover.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        let plot = self.layout().plot;
        let row_count = self.chart_data().rows.len();
        self.hover = if plot.contains(x, y) {
            category_index_at(x, plot, row_count).map(|category_index| HoverPoint {
                x,
                y,
                category_index,
            })
        } else {
            None
        };
        trace!(x, y, hovered = ?self.hover.map(|h| h.category_index), "pointer move");
        self.hover.map(|hover| hover.category_index)
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    #[must_use]
    pub fn hovered_category(&self) -> Option<usize> {
        self.hover.map(|hover| hover.category_index)
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<ChartTooltip> {
        let hover = self.hover?;
        let data = self.chart_data();
        let row = data.rows.get(hover.category_index)?;
        Some(ChartTooltip::from_row(
            hover.category_index,
            row,
            &self.config,
            &self.style,
        ))
    }

    pub fn build_render_frame(&self) -> RiskChartResult<RenderFrame> {
        build_panel_frame(&self.chart_data(), self.hover, &self.config, &self.style)
    }

    pub fn render(&mut self) -> RiskChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
