//! # Animation State Module
//!
//! State for the one-shot pour animation: the trigger latch and the
//! animation clock. The trigger is a two-state machine; once fired it never
//! re-arms for the lifetime of the app.

use log::warn;

/// Lifecycle of the pour trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Waiting for the first activation
    Armed,
    /// Activated; terminal
    Fired,
}

/// Trigger latch plus the clock the timeline is replayed against.
#[derive(Debug)]
pub struct AnimationState {
    /// Current trigger state
    pub trigger: TriggerState,

    /// Frame-clock timestamp (seconds) captured when the trigger fired.
    /// Elapsed animation time is measured from here, never from wall clock.
    started_at: Option<f64>,
}

impl AnimationState {
    /// Create a new armed animation state
    pub fn new() -> Self {
        Self {
            trigger: TriggerState::Armed,
            started_at: None,
        }
    }

    /// Whether the trigger has already fired
    pub fn is_fired(&self) -> bool {
        self.trigger == TriggerState::Fired
    }

    /// Fire the trigger, recording `now_seconds` as animation start.
    ///
    /// Returns `true` on the Armed → Fired transition. A second call is a
    /// no-op that leaves the recorded start time untouched.
    pub fn fire(&mut self, now_seconds: f64) -> bool {
        if self.is_fired() {
            warn!("💧 Pour trigger fired twice; ignoring");
            return false;
        }
        self.trigger = TriggerState::Fired;
        self.started_at = Some(now_seconds);
        true
    }

    /// Milliseconds since the trigger fired, or `None` while still armed.
    pub fn elapsed_ms(&self, now_seconds: f64) -> Option<f64> {
        self.started_at
            .map(|start| ((now_seconds - start) * 1000.0).max(0.0))
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_armed_with_no_clock() {
        let state = AnimationState::new();
        assert_eq!(state.trigger, TriggerState::Armed);
        assert!(!state.is_fired());
        assert_eq!(state.elapsed_ms(12.0), None);
    }

    #[test]
    fn test_fire_transitions_once() {
        let mut state = AnimationState::new();
        assert!(state.fire(2.0));
        assert!(state.is_fired());
        assert_eq!(state.elapsed_ms(2.0), Some(0.0));
    }

    #[test]
    fn test_second_fire_is_a_noop() {
        let mut state = AnimationState::new();
        assert!(state.fire(2.0));
        assert!(!state.fire(9.0));

        // Still fired, and the original start time is preserved
        assert!(state.is_fired());
        assert_eq!(state.elapsed_ms(3.0), Some(1000.0));
    }

    #[test]
    fn test_elapsed_converts_seconds_to_milliseconds() {
        let mut state = AnimationState::new();
        state.fire(1.5);
        assert_eq!(state.elapsed_ms(4.0), Some(2500.0));
    }

    #[test]
    fn test_elapsed_never_goes_negative() {
        let mut state = AnimationState::new();
        state.fire(5.0);
        assert_eq!(state.elapsed_ms(4.0), Some(0.0));
    }
}
