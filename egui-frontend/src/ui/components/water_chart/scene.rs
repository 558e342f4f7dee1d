//! # Retained Chart Scene
//!
//! A small retained scene graph for the water-use chart. Every drawable is a
//! `VisualElement` keyed by `(Layer, id)`, where the id is the stable
//! material name (or an axis part name). Binding data to the scene is an
//! explicit reconciliation step: `Scene::upsert` looks the key up and either
//! creates the element or updates it in place, so re-running a builder never
//! appends duplicates.
//!
//! Elements carry two attribute sets: `base`, the state captured when their
//! transition was scheduled, and `attrs`, the currently displayed state. The
//! timeline recomputes `attrs` from `base` on every frame, which keeps
//! playback a pure function of elapsed time.

use eframe::egui::{Align2, Color32};
use std::collections::HashMap;

use crate::ui::components::theme::lerp_color;

/// Paint layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Axis lines, ticks, and captions
    Axes,
    /// Transient "water pouring" rectangles
    Pour,
    /// Final bars
    Bars,
    /// Numeric water-use labels
    Labels,
}

/// Stable identity of a scene element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneKey {
    pub layer: Layer,
    pub id: String,
}

impl SceneKey {
    pub fn new(layer: Layer, id: impl Into<String>) -> Self {
        Self {
            layer,
            id: id.into(),
        }
    }
}

/// What an element draws as. Geometry lives in `Attrs`.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Axis-aligned rectangle; `Attrs` x/y is the top-left corner
    Rect,
    /// Text anchored at `Attrs` x/y
    Text {
        font_size: f32,
        anchor: Align2,
        /// Rotation in radians (only the vertical axis caption uses this)
        angle: f32,
    },
}

impl ElementKind {
    /// Plain centered text, the common case for labels and ticks.
    pub fn centered_text(font_size: f32) -> Self {
        ElementKind::Text {
            font_size,
            anchor: Align2::CENTER_CENTER,
            angle: 0.0,
        }
    }
}

/// The animatable attribute set of a scene element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attrs {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub opacity: f32,
    /// Text content; `None` for rectangles and not-yet-revealed labels
    pub text: Option<String>,
}

impl Default for Attrs {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fill: Color32::BLACK,
            stroke: Color32::TRANSPARENT,
            opacity: 1.0,
            text: None,
        }
    }
}

/// Partial attribute targets for one transition stage.
///
/// Only the attributes a stage names move; everything else keeps the value it
/// had when the stage began.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrTargets {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill: Option<Color32>,
    pub stroke: Option<Color32>,
    pub opacity: Option<f32>,
    /// Text applies when the stage completes, matching the reference
    /// animation's end-of-transition text swap
    pub text: Option<String>,
}

impl AttrTargets {
    /// The state after this stage has fully run, starting from `from`.
    pub fn applied_to(&self, from: &Attrs) -> Attrs {
        Attrs {
            x: self.x.unwrap_or(from.x),
            y: self.y.unwrap_or(from.y),
            width: self.width.unwrap_or(from.width),
            height: self.height.unwrap_or(from.height),
            fill: self.fill.unwrap_or(from.fill),
            stroke: self.stroke.unwrap_or(from.stroke),
            opacity: self.opacity.unwrap_or(from.opacity),
            text: self.text.clone().or_else(|| from.text.clone()),
        }
    }

    /// Interpolate from `from` toward these targets at eased progress `t`.
    pub fn interpolate(&self, from: &Attrs, t: f64) -> Attrs {
        if t >= 1.0 {
            return self.applied_to(from);
        }
        let t = t as f32;
        let lerp = |a: f32, b: Option<f32>| b.map_or(a, |b| a + (b - a) * t);
        Attrs {
            x: lerp(from.x, self.x),
            y: lerp(from.y, self.y),
            width: lerp(from.width, self.width),
            height: lerp(from.height, self.height),
            fill: self.fill.map_or(from.fill, |c| lerp_color(from.fill, c, t)),
            stroke: self
                .stroke
                .map_or(from.stroke, |c| lerp_color(from.stroke, c, t)),
            opacity: lerp(from.opacity, self.opacity),
            text: from.text.clone(),
        }
    }
}

/// One drawable entity bound to a material record (or an axis part).
#[derive(Debug, Clone)]
pub struct VisualElement {
    pub key: SceneKey,
    pub kind: ElementKind,
    /// State captured when the element's transition was scheduled
    pub base: Attrs,
    /// Currently displayed state
    pub attrs: Attrs,
}

/// The retained scene: keyed elements in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<VisualElement>,
    index: HashMap<SceneKey, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the element for `key` (the data-join step).
    ///
    /// An existing element keeps its position in paint order; its kind and
    /// both attribute sets are replaced with the fresh values.
    pub fn upsert(&mut self, key: SceneKey, kind: ElementKind, attrs: Attrs) {
        match self.index.get(&key) {
            Some(&i) => {
                let element = &mut self.elements[i];
                element.kind = kind;
                element.base = attrs.clone();
                element.attrs = attrs;
            }
            None => {
                self.index.insert(key.clone(), self.elements.len());
                self.elements.push(VisualElement {
                    key,
                    kind,
                    base: attrs.clone(),
                    attrs,
                });
            }
        }
    }

    pub fn get(&self, key: &SceneKey) -> Option<&VisualElement> {
        self.index.get(key).map(|&i| &self.elements[i])
    }

    pub fn get_mut(&mut self, key: &SceneKey) -> Option<&mut VisualElement> {
        self.index.get(key).map(|&i| &mut self.elements[i])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements back-to-front: by layer, insertion order within a layer.
    pub fn paint_order(&self) -> impl Iterator<Item = &VisualElement> {
        let mut order: Vec<&VisualElement> = self.elements.iter().collect();
        order.sort_by_key(|e| e.key.layer);
        order.into_iter()
    }
}
