//! # UI State
//!
//! State structs for the visualization, kept separate from rendering code.

pub mod animation_state;

pub use animation_state::{AnimationState, TriggerState};
