//! # Scale Builder
//!
//! Pure scale computation for the water-use chart: a band scale placing each
//! material along the horizontal axis and a linear scale mapping water-use
//! values onto vertical pixel positions.
//!
//! Both scales are plain values derived from the dataset and the viewport
//! constants. Nothing here touches the scene or the UI, which keeps the
//! geometry fully unit-testable.

use crate::ui::components::water_chart::config::{ChartMargin, ChartSize, WATER_DOMAIN_PADDING};
use shared::Dataset;

/// Uniform inner/outer padding between bands, as a fraction of the step.
const BAND_PADDING: f32 = 0.1;

/// Band alignment within the leftover range space (0.5 = centered).
const BAND_ALIGN: f32 = 0.5;

/// Maps material names to evenly spaced, padded horizontal intervals.
///
/// Domain order is dataset order; the animation stagger and the left-to-right
/// reveal both depend on it.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    start: f32,
    step: f32,
    bandwidth: f32,
}

impl BandScale {
    /// Build the horizontal scale over `[margin.left, size.width]`.
    pub fn from_dataset(dataset: &Dataset, margin: &ChartMargin, size: &ChartSize) -> Self {
        let domain: Vec<String> = dataset
            .records()
            .iter()
            .map(|r| r.material.clone())
            .collect();

        let range_start = margin.left;
        let range_stop = size.width;
        let n = domain.len() as f32;

        // Standard band-scale arithmetic: one step per band plus padding on
        // both ends, with the leftover space distributed by the alignment.
        let step =
            (range_stop - range_start) / (n - BAND_PADDING + BAND_PADDING * 2.0).max(1.0);
        let start = range_start
            + (range_stop - range_start - step * (n - BAND_PADDING)) * BAND_ALIGN;
        let bandwidth = step * (1.0 - BAND_PADDING);

        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    /// Left edge of the band for `name`, or `None` for an unknown material.
    pub fn position(&self, name: &str) -> Option<f32> {
        self.domain
            .iter()
            .position(|m| m == name)
            .map(|i| self.start + self.step * i as f32)
    }

    /// Horizontal center of the band for `name`.
    pub fn center(&self, name: &str) -> Option<f32> {
        self.position(name).map(|x| x + self.bandwidth / 2.0)
    }

    /// Width of each band.
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Material names in dataset order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Maps water-use values linearly onto vertical pixel positions.
///
/// The range is inverted (larger values map to smaller y) per screen
/// coordinate convention, so the baseline sits at the bottom of the plot.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain_max: f64,
    range_start: f32,
    range_stop: f32,
}

impl LinearScale {
    /// Build the vertical scale with domain `[0, max(water_use) + padding]`
    /// and range `[size.height, margin.top]`.
    pub fn from_dataset(dataset: &Dataset, margin: &ChartMargin, size: &ChartSize) -> Self {
        Self {
            domain_max: dataset.max_water_use() + WATER_DOMAIN_PADDING,
            range_start: size.height,
            range_stop: margin.top,
        }
    }

    /// Map a water-use value to a y coordinate.
    pub fn scale(&self, value: f64) -> f32 {
        let t = (value / self.domain_max) as f32;
        self.range_start + (self.range_stop - self.range_start) * t
    }

    /// Upper bound of the domain.
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Tick values for the vertical axis.
    ///
    /// Interval: domain max divided by 7, rounded to the nearest 5, with a
    /// minimum interval of 5. Ticks start at zero and stop at the domain max.
    pub fn ticks(&self) -> Vec<f64> {
        let interval_candidate = self.domain_max / 7.0;
        let interval = ((interval_candidate / 5.0).round() * 5.0).max(5.0);

        let mut marks = Vec::new();
        let mut current = 0.0;
        while current <= self.domain_max {
            marks.push(current);
            current += interval;
        }
        marks
    }
}
