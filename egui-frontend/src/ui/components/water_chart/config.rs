//! # Chart Configuration
//!
//! Fixed viewport constants and animation timing for the water-use chart.
//! The chart core treats these as read-only; everything downstream (scales,
//! choreography, renderer) receives them through `ChartContext` instead of
//! reaching into module globals.

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Plot area dimensions, in pixels (excluding margins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f32,
    pub height: f32,
}

impl ChartSize {
    /// Full canvas width including both horizontal margins.
    pub fn canvas_width(&self, margin: &ChartMargin) -> f32 {
        self.width + margin.left + margin.right
    }

    /// Full canvas height including both vertical margins.
    pub fn canvas_height(&self, margin: &ChartMargin) -> f32 {
        self.height + margin.top + margin.bottom
    }
}

/// Margins used by the deployed chart.
pub const CHART_MARGIN: ChartMargin = ChartMargin {
    top: 20.0,
    right: 20.0,
    bottom: 40.0,
    left: 60.0,
};

/// Plot size used by the deployed chart.
pub const CHART_SIZE: ChartSize = ChartSize {
    width: 640.0,
    height: 420.0,
};

/// Duration of each pour stage (fall, then drain), in milliseconds.
pub const POUR_DURATION_MS: f64 = 2000.0;

/// Duration of the bar-growth and label-reveal transitions, in milliseconds.
pub const WATER_DURATION_MS: f64 = 3000.0;

/// Per-index stagger between adjacent bars and labels, in milliseconds.
pub const STAGGER_STEP_MS: f64 = 100.0;

/// Headroom added above the tallest bar so it never clips the plot top.
pub const WATER_DOMAIN_PADDING: f64 = 15.0;
