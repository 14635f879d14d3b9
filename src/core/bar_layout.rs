use serde::{Deserialize, Serialize};

use crate::core::{ChartRow, PlotArea, ValueScale};
use crate::error::{RiskChartError, RiskChartResult};

/// Pixel extent of one bar, spanning from the zero line to its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl BarRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Deterministic geometry for one category: its band and both series bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarGeometry {
    pub band_left: f64,
    pub band_right: f64,
    pub center_x: f64,
    pub baseline: BarRect,
    pub shocked: BarRect,
}

/// Lays out baseline/shocked bar pairs, one category band per row.
///
/// Each band loses `category_gap_ratio` of its width on both sides; the
/// remaining width holds two equal bars separated by `bar_gap_px`.
pub fn project_grouped_bars(
    rows: &[ChartRow],
    scale: &ValueScale,
    area: PlotArea,
    bar_gap_px: f64,
    category_gap_ratio: f64,
) -> RiskChartResult<Vec<GroupedBarGeometry>> {
    if !bar_gap_px.is_finite() || bar_gap_px < 0.0 {
        return Err(RiskChartError::InvalidData(
            "bar gap must be finite and >= 0".to_owned(),
        ));
    }
    if !category_gap_ratio.is_finite() || !(0.0..0.5).contains(&category_gap_ratio) {
        return Err(RiskChartError::InvalidData(
            "category gap ratio must be finite and in [0, 0.5)".to_owned(),
        ));
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let band_width = area.width / rows.len() as f64;
    let inner_width = band_width * (1.0 - 2.0 * category_gap_ratio);
    let bar_width = ((inner_width - bar_gap_px) * 0.5).max(1.0);
    let group_width = bar_width * 2.0 + bar_gap_px;
    let zero_y = scale.value_to_pixel(0.0, area)?;

    let mut projected = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let band_left = area.left + band_width * index as f64;
        let center_x = band_left + band_width * 0.5;
        let group_left = center_x - group_width * 0.5;

        let baseline_y = scale.value_to_pixel(row.baseline, area)?;
        let shocked_y = scale.value_to_pixel(row.shocked, area)?;
        let baseline_left = group_left;
        let shocked_left = group_left + bar_width + bar_gap_px;

        projected.push(GroupedBarGeometry {
            band_left,
            band_right: band_left + band_width,
            center_x,
            baseline: BarRect {
                x_left: baseline_left,
                x_right: baseline_left + bar_width,
                y_top: baseline_y.min(zero_y),
                y_bottom: baseline_y.max(zero_y),
            },
            shocked: BarRect {
                x_left: shocked_left,
                x_right: shocked_left + bar_width,
                y_top: shocked_y.min(zero_y),
                y_bottom: shocked_y.max(zero_y),
            },
        });
    }

    Ok(projected)
}

/// Index of the category band under `x`, if `x` lies inside the plot width.
#[must_use]
pub fn category_index_at(x: f64, area: PlotArea, category_count: usize) -> Option<usize> {
    if category_count == 0 || !x.is_finite() || x < area.left || x > area.right() {
        return None;
    }
    let band_width = area.width / category_count as f64;
    let index = ((x - area.left) / band_width).floor() as usize;
    Some(index.min(category_count - 1))
}
