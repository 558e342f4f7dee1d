//! # App State Module
//!
//! The central application state for the water-use visualization and its
//! initialization logic.
//!
//! ## Purpose:
//! `FabricWaterVizApp` owns everything the UI needs: the chart context
//! (dataset + scales + viewport), the retained scene, the transition
//! timeline, and the trigger state. Initialization loads and validates the
//! embedded dataset, derives the scales, and builds the static axes —
//! exactly once, before the first frame.

use anyhow::Context as _;
use log::info;
use shared::Dataset;

use crate::ui::components::water_chart::choreography::{
    build_pour_choreography, build_static_scene,
};
use crate::ui::components::water_chart::config::{CHART_MARGIN, CHART_SIZE};
use crate::ui::components::water_chart::scene::Scene;
use crate::ui::components::water_chart::timeline::Timeline;
use crate::ui::components::water_chart::ChartContext;
use crate::ui::state::AnimationState;

/// The material dataset, embedded at compile time and parsed once at startup.
const MATERIALS_JSON: &str = include_str!("../../data/materials.json");

/// Main application struct for the egui water-use visualization
pub struct FabricWaterVizApp {
    /// Dataset, scales, and viewport constants
    pub context: ChartContext,

    /// Retained scene: axes plus the animated layers once poured
    pub scene: Scene,

    /// Scheduled transitions for the pour animation
    pub timeline: Timeline,

    /// Trigger latch and animation clock
    pub animation: AnimationState,
}

impl FabricWaterVizApp {
    /// Create the app: load the dataset, build scales and the static scene.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing fabric water-use visualization");

        crate::ui::components::setup_chart_style(&cc.egui_ctx);

        let dataset =
            Dataset::from_json_str(MATERIALS_JSON).context("loading embedded material dataset")?;
        info!(
            "📊 Loaded {} materials (max water use {})",
            dataset.len(),
            dataset.max_water_use()
        );

        let context = ChartContext::new(dataset, CHART_MARGIN, CHART_SIZE);

        let mut scene = Scene::new();
        build_static_scene(&mut scene, &context);

        Ok(Self {
            context,
            scene,
            timeline: Timeline::new(),
            animation: AnimationState::new(),
        })
    }

    /// Activate the pour trigger.
    ///
    /// Schedules the full choreography and latches the trigger; the disable
    /// happens at scheduling time, not at animation completion. A repeat
    /// call does nothing.
    pub fn pour_water(&mut self, now_seconds: f64) {
        if !self.animation.fire(now_seconds) {
            return;
        }
        build_pour_choreography(&mut self.scene, &mut self.timeline, &self.context);
        info!("💧 Pour started");
    }
}
