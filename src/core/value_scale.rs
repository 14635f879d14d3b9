use crate::core::PlotArea;
use crate::error::{RiskChartError, RiskChartResult};

const NICE_STEP_FRACTIONS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Vertical value axis anchored at zero with "nice" tick spacing.
///
/// Larger values map to smaller pixel Y (higher on screen).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
    step: f64,
    max_ticks: usize,
}

impl ValueScale {
    /// Builds a scale covering `0` and every value, snapped outward to a
    /// multiple of a nice step so that roughly `tick_count` ticks fit.
    pub fn from_values<I>(values: I, tick_count: usize) -> RiskChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        if tick_count < 2 {
            return Err(RiskChartError::InvalidData(
                "value scale tick count must be >= 2".to_owned(),
            ));
        }

        let mut low = 0.0_f64;
        let mut high = 0.0_f64;
        for value in values {
            if !value.is_finite() {
                return Err(RiskChartError::InvalidData(
                    "chart values must be finite".to_owned(),
                ));
            }
            low = low.min(value);
            high = high.max(value);
        }
        // Equal or subnormal spans cannot produce a usable step.
        if high - low < f64::MIN_POSITIVE {
            high = low + 1.0;
        }

        let step = nice_step((high - low) / (tick_count - 1) as f64);
        let domain_min = (low / step).floor() * step;
        let domain_max = (high / step).ceil() * step;
        if !step.is_normal()
            || step < 0.0
            || !domain_min.is_finite()
            || !domain_max.is_finite()
            || !(domain_max - domain_min).is_finite()
        {
            return Err(RiskChartError::InvalidData(format!(
                "chart values [{low}, {high}] exceed the representable axis range"
            )));
        }

        Ok(Self {
            domain_min,
            domain_max,
            step,
            // Outward snapping adds at most one interval at each end.
            max_ticks: tick_count.saturating_add(2),
        })
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Tick values from bottom to top, both domain ends included.
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        let intervals = ((self.domain_max - self.domain_min) / self.step).round() as usize;
        let count = intervals.saturating_add(1).min(self.max_ticks);
        (0..count)
            .map(|i| self.domain_min + self.step * i as f64)
            .collect()
    }

    pub fn value_to_pixel(&self, value: f64, area: PlotArea) -> RiskChartResult<f64> {
        if !area.is_valid() {
            return Err(RiskChartError::InvalidData(
                "plot area must be finite with positive size".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(RiskChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        Ok(area.bottom() - normalized * area.height)
    }

    pub fn pixel_to_value(&self, pixel_y: f64, area: PlotArea) -> RiskChartResult<f64> {
        if !area.is_valid() {
            return Err(RiskChartError::InvalidData(
                "plot area must be finite with positive size".to_owned(),
            ));
        }
        if !pixel_y.is_finite() {
            return Err(RiskChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (area.bottom() - pixel_y) / area.height;
        Ok(self.domain_min + normalized * (self.domain_max - self.domain_min))
    }
}

fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let fraction = raw_step / magnitude;
    let nice = NICE_STEP_FRACTIONS
        .into_iter()
        .find(|&candidate| fraction <= candidate + 1e-9)
        .unwrap_or(10.0);
    nice * magnitude
}
