//! # Water-Use Chart
//!
//! The animated "water poured into fabric bars" chart. The submodules split
//! the work the same way the rest of the app splits components: pure
//! calculation (scales, easing, timeline) separate from scene construction
//! (choreography) and painting (renderer).
//!
//! ## Module Organization:
//! - `config` - viewport constants and animation durations
//! - `scale` - band + linear scale construction
//! - `easing` - transition easing curves
//! - `scene` - retained keyed scene graph (data-join)
//! - `timeline` - transition scheduling and time sampling
//! - `choreography` - static axes and the pour/bars/labels animation script
//! - `renderer` - egui painter pass over the scene

pub mod choreography;
pub mod config;
pub mod easing;
pub mod renderer;
pub mod scale;
pub mod scene;
pub mod timeline;

use config::{ChartMargin, ChartSize};
use scale::{BandScale, LinearScale};
use shared::Dataset;

/// Everything the scene builders need, constructed once at startup and
/// passed explicitly instead of living in module-level globals.
#[derive(Debug, Clone)]
pub struct ChartContext {
    pub dataset: Dataset,
    pub band: BandScale,
    pub water: LinearScale,
    pub margin: ChartMargin,
    pub size: ChartSize,
}

impl ChartContext {
    /// Derive both scales from the dataset and the viewport constants.
    pub fn new(dataset: Dataset, margin: ChartMargin, size: ChartSize) -> Self {
        let band = BandScale::from_dataset(&dataset, &margin, &size);
        let water = LinearScale::from_dataset(&dataset, &margin, &size);
        Self {
            dataset,
            band,
            water,
            margin,
            size,
        }
    }
}
