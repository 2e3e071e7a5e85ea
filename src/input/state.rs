//! Gesture state machine - one explicit state instead of scattered flags.
//!
//! ## State Transitions
//!
//! ```text
//! Idle       -> Dragging     (pointer down anywhere but an arrow control)
//! Suppressed -> Dragging     (a new press supersedes the pending release)
//! Dragging   -> Suppressed   (pointer up beyond the drag threshold)
//! Dragging   -> Idle         (pointer up within the threshold, or cancel)
//! Suppressed -> Idle         (tick at or after the scheduled deadline)
//! ```
//!
//! Item clicks are swallowed only while `Suppressed`, which is how the
//! synthetic click fired at the end of a drag gets filtered out.

use std::time::Instant;

/// Unified state for pointer gestures on one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; item clicks navigate
    #[default]
    Idle,

    /// Pointer is down on the root
    Dragging {
        /// Horizontal position at pointer down
        start_x: f32,
        /// Most recent horizontal position seen
        last_x: f32,
        /// Whether a move has been seen (items are inert once true)
        moved: bool,
    },

    /// A drag just ended; clicks are swallowed until `until`
    Suppressed {
        /// Scheduled transition back to `Idle`
        until: Instant,
    },
}

impl GestureState {
    /// Returns true while the pointer is held down
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true while item clicks are being swallowed
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Suppressed { .. } => "suppressed",
        }
    }

    /// Pending scheduled transition, if any
    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::Suppressed { until } => Some(*until),
            _ => None,
        }
    }

    /// Start a drag at `x`
    pub fn begin_drag(&mut self, x: f32) {
        *self = Self::Dragging {
            start_x: x,
            last_x: x,
            moved: false,
        };
    }

    /// Record a move while dragging.
    ///
    /// Returns true on the first move of the gesture, false otherwise
    /// (including when not dragging at all).
    pub fn track_move(&mut self, x: f32) -> bool {
        match self {
            Self::Dragging { last_x, moved, .. } => {
                *last_x = x;
                let first = !*moved;
                *moved = true;
                first
            }
            _ => false,
        }
    }

    /// Leave `Dragging`, returning the start position if a drag was active.
    ///
    /// The caller decides whether to move on to `Suppressed` or `Idle`.
    pub fn finish_drag(&mut self) -> Option<f32> {
        match *self {
            Self::Dragging { start_x, .. } => {
                *self = Self::Idle;
                Some(start_x)
            }
            _ => None,
        }
    }

    /// Swallow clicks until `until`
    pub fn suppress_until(&mut self, until: Instant) {
        *self = Self::Suppressed { until };
    }

    /// Apply the scheduled transition if its deadline has passed.
    ///
    /// Returns true if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            Self::Suppressed { until } if now >= until => {
                *self = Self::Idle;
                true
            }
            _ => false,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
