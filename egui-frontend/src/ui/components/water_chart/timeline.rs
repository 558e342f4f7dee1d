//! # Transition Timeline
//!
//! The animation scheduler for the chart scene. A `Transition` is an ordered
//! list of `TransitionStage`s bound to one scene element; the `Timeline`
//! holds every scheduled transition and replays them against the scene.
//!
//! Scheduling is synchronous and playback is a pure function of elapsed time:
//! `apply(scene, at_ms)` recomputes each element's attributes from its base
//! state and the timestamp, so sampling the same instant twice yields the
//! same scene regardless of frame rate or rendering latency. There is no
//! cancellation; once scheduled, a transition runs to completion.

use crate::ui::components::water_chart::easing::Easing;
use crate::ui::components::water_chart::scene::{Attrs, AttrTargets, Scene, SceneKey};

/// One step of a transition: where to go, how long it takes, how it eases,
/// and how long to wait after the previous stage ends.
#[derive(Debug, Clone)]
pub struct TransitionStage {
    pub targets: AttrTargets,
    pub duration_ms: f64,
    /// Delay before this stage starts: measured from animation start for the
    /// first stage, from the previous stage's end otherwise
    pub delay_ms: f64,
    pub easing: Easing,
}

/// The staged animation of a single scene element.
#[derive(Debug, Clone)]
pub struct Transition {
    pub key: SceneKey,
    pub stages: Vec<TransitionStage>,
}

impl Transition {
    pub fn new(key: SceneKey, stages: Vec<TransitionStage>) -> Self {
        Self { key, stages }
    }

    /// Time at which the final stage completes, relative to animation start.
    pub fn end_ms(&self) -> f64 {
        self.stages
            .iter()
            .map(|s| s.delay_ms + s.duration_ms)
            .sum()
    }

    /// Attribute state at `at_ms`, starting from `base`.
    ///
    /// Before the first stage's delay the base state holds; inside a stage
    /// the attributes interpolate from the previous stage's outcome toward
    /// the stage targets under its easing; past the end the final targets
    /// hold.
    pub fn sample(&self, base: &Attrs, at_ms: f64) -> Attrs {
        let mut from = base.clone();
        let mut cursor = 0.0;

        for stage in &self.stages {
            let start = cursor + stage.delay_ms;
            let end = start + stage.duration_ms;

            if at_ms < start {
                return from;
            }
            if at_ms < end {
                let t = (at_ms - start) / stage.duration_ms;
                return stage.targets.interpolate(&from, stage.easing.apply(t));
            }

            from = stage.targets.applied_to(&from);
            cursor = end;
        }

        from
    }
}

/// All transitions scheduled for the current animation.
#[derive(Debug, Default)]
pub struct Timeline {
    transitions: Vec<Transition>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition. Returns immediately; playback happens in `apply`.
    pub fn schedule(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Scheduled transitions in scheduling order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Completion time of the whole choreography.
    pub fn total_duration_ms(&self) -> f64 {
        self.transitions
            .iter()
            .map(Transition::end_ms)
            .fold(0.0, f64::max)
    }

    /// Whether every scheduled transition has run out at `at_ms`.
    pub fn is_finished(&self, at_ms: f64) -> bool {
        at_ms >= self.total_duration_ms()
    }

    /// Recompute the current attributes of every animated element.
    ///
    /// Elements without a scheduled transition are left untouched; a
    /// transition whose element is missing from the scene is skipped.
    pub fn apply(&self, scene: &mut Scene, at_ms: f64) {
        for transition in &self.transitions {
            if let Some(element) = scene.get_mut(&transition.key) {
                element.attrs = transition.sample(&element.base, at_ms);
            }
        }
    }
}
