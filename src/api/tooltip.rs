use smallvec::SmallVec;

use crate::core::{ChartRow, PlotArea, Viewport};
use crate::render::{Color, RectCorners, RectPrimitive, TextHAlign, TextPrimitive};

use super::panel_layout::{estimate_text_width_px, format_value};
use super::{RiskChartConfig, RiskChartStyle};

const TOOLTIP_OFFSET_PX: f64 = 10.0;
const TOOLTIP_PADDING_PX: f64 = 10.0;
const TOOLTIP_LINE_HEIGHT_RATIO: f64 = 1.4;

/// Pointer position last reported inside the plot, with its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint {
    pub x: f64,
    pub y: f64,
    pub category_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub series_name: String,
    pub value: f64,
    pub color: Color,
}

/// Content of the hover tooltip for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTooltip {
    pub category_index: usize,
    pub label: String,
    pub entries: SmallVec<[TooltipEntry; 2]>,
}

impl ChartTooltip {
    #[must_use]
    pub fn from_row(
        category_index: usize,
        row: &ChartRow,
        config: &RiskChartConfig,
        style: &RiskChartStyle,
    ) -> Self {
        let mut entries = SmallVec::new();
        entries.push(TooltipEntry {
            series_name: config.baseline_series_name.clone(),
            value: row.baseline,
            color: style.baseline_bar_color,
        });
        entries.push(TooltipEntry {
            series_name: config.shocked_series_name.clone(),
            value: row.shocked,
            color: style.shocked_bar_color,
        });
        Self {
            category_index,
            label: row.name.clone(),
            entries,
        }
    }

    /// Text lines in display order: label first, then `name : value` per series.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        if !self.label.is_empty() {
            lines.push(self.label.clone());
        }
        lines.extend(
            self.entries
                .iter()
                .map(|entry| format!("{} : {}", entry.series_name, format_value(entry.value))),
        );
        lines
    }
}

/// Tooltip box and its text, positioned next to the pointer and kept on screen.
pub(super) fn layout_tooltip(
    tooltip: &ChartTooltip,
    hover: HoverPoint,
    viewport: Viewport,
    plot: PlotArea,
    config: &RiskChartConfig,
    style: &RiskChartStyle,
) -> (RectPrimitive, Vec<TextPrimitive>) {
    let font_size = config.tooltip_font_size_px;
    let line_height = font_size * TOOLTIP_LINE_HEIGHT_RATIO;
    let lines = tooltip.lines();

    let text_width = lines
        .iter()
        .map(|line| estimate_text_width_px(line, font_size))
        .fold(0.0, f64::max);
    let box_width = text_width + 2.0 * TOOLTIP_PADDING_PX;
    let box_height = line_height * lines.len() as f64 + 2.0 * TOOLTIP_PADDING_PX;

    let viewport_width = f64::from(viewport.width);
    let mut left = hover.x + TOOLTIP_OFFSET_PX;
    if left + box_width > viewport_width {
        left = hover.x - TOOLTIP_OFFSET_PX - box_width;
    }
    left = left.max(0.0);
    let max_top = (f64::from(viewport.height) - box_height).max(0.0);
    let top = (hover.y + TOOLTIP_OFFSET_PX).clamp(plot.top.min(max_top), max_top);

    let background = RectPrimitive::new(left, top, box_width, box_height, style.tooltip_background_color)
        .with_border(1.0, style.tooltip_border_color)
        .with_corner_radius(style.tooltip_corner_radius_px, RectCorners::All);

    let texts = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            TextPrimitive::new(
                line,
                left + TOOLTIP_PADDING_PX,
                top + TOOLTIP_PADDING_PX + line_height * index as f64,
                font_size,
                style.tooltip_text_color,
                TextHAlign::Left,
            )
        })
        .collect();

    (background, texts)
}
