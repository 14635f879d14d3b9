use tracing::trace;

use crate::core::{ChartData, ValueScale, project_grouped_bars};
use crate::error::RiskChartResult;
use crate::render::{
    CanvasLayerKind, LinePrimitive, LineStrokeStyle, RectCorners, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive, TextWeight,
};

use super::panel_layout::{PanelLayout, format_value};
use super::tooltip::{ChartTooltip, HoverPoint, layout_tooltip};
use super::{RiskChartConfig, RiskChartStyle};

const Y_TICK_LABEL_GAP_PX: f64 = 8.0;
const GRID_LINE_WIDTH_PX: f64 = 1.0;

/// Materializes the whole panel for `data` into one frame.
///
/// Pure function of its inputs: the same data, hover, config and style always
/// produce the same frame.
pub fn build_panel_frame(
    data: &ChartData,
    hover: Option<HoverPoint>,
    config: &RiskChartConfig,
    style: &RiskChartStyle,
) -> RiskChartResult<RenderFrame> {
    let layout = PanelLayout::resolve(config);
    let plot = layout.plot;
    let mut frame = RenderFrame::new(config.viewport);

    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            layout.panel.left,
            layout.panel.top,
            layout.panel.width,
            layout.panel.height,
            style.panel_fill_color,
        )
        .with_border(style.panel_border_width_px, style.panel_border_color)
        .with_corner_radius(style.panel_corner_radius_px, RectCorners::All),
    );
    push_header(&mut frame, &layout, data.has_result, config, style);

    let scale = ValueScale::from_values(
        data.rows.iter().flat_map(|row| [row.baseline, row.shocked]),
        config.y_tick_count,
    )?;
    for tick in scale.ticks() {
        let y = scale.value_to_pixel(tick, plot)?;
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                GRID_LINE_WIDTH_PX,
                style.grid_line_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed {
                dash_px: style.grid_dash_px,
                gap_px: style.grid_gap_px,
            }),
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_value(tick),
                plot.left - Y_TICK_LABEL_GAP_PX,
                y - config.axis_font_size_px * 0.5,
                config.axis_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ),
        );
    }

    let groups = project_grouped_bars(
        &data.rows,
        &scale,
        plot,
        config.bar_gap_px,
        config.category_gap_ratio,
    )?;
    for (row, group) in data.rows.iter().zip(&groups) {
        for (bar, color) in [
            (group.baseline, style.baseline_bar_color),
            (group.shocked, style.shocked_bar_color),
        ] {
            frame.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(bar.x_left, bar.y_top, bar.width(), bar.height(), color)
                    .with_corner_radius(config.bar_corner_radius_px, RectCorners::Top),
            );
        }
        if !row.name.is_empty() {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    row.name.clone(),
                    group.center_x,
                    plot.bottom() + config.x_label_offset_px,
                    config.axis_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }

    if let Some(hover) = hover {
        if let (Some(row), Some(group)) = (
            data.rows.get(hover.category_index),
            groups.get(hover.category_index),
        ) {
            frame.push_rect(
                CanvasLayerKind::Cursor,
                RectPrimitive::new(
                    group.band_left,
                    plot.top,
                    group.band_right - group.band_left,
                    plot.height,
                    style.cursor_color,
                ),
            );
            let tooltip = ChartTooltip::from_row(hover.category_index, row, config, style);
            let (background, texts) =
                layout_tooltip(&tooltip, hover, config.viewport, plot, config, style);
            frame.push_rect(CanvasLayerKind::Tooltip, background);
            for text in texts {
                frame.push_text(CanvasLayerKind::Tooltip, text);
            }
        }
    }

    trace!(
        rows = data.rows.len(),
        has_result = data.has_result,
        lines = frame.line_count(),
        rects = frame.rect_count(),
        texts = frame.text_count(),
        "built risk panel frame"
    );
    Ok(frame)
}

fn push_header(
    frame: &mut RenderFrame,
    layout: &PanelLayout,
    has_result: bool,
    config: &RiskChartConfig,
    style: &RiskChartStyle,
) {
    let header = layout.header;
    if !config.title.is_empty() {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                config.title.clone(),
                header.left,
                header.top + (header.height - config.title_font_size_px) * 0.5,
                config.title_font_size_px,
                style.title_color,
                TextHAlign::Left,
            )
            .with_weight(TextWeight::SemiBold),
        );
    }
    if !has_result && !config.empty_hint.is_empty() {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                config.empty_hint.to_uppercase(),
                header.right(),
                header.top + (header.height - config.hint_font_size_px) * 0.5,
                config.hint_font_size_px,
                style.hint_color,
                TextHAlign::Right,
            ),
        );
    }
}
