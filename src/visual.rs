//! Snapshot of everything the controller has pushed to its surface.

use crate::host::PointerEvents;
use serde::Serialize;

/// Mirror of the visual state last applied to the host.
///
/// Updated in lockstep with every [`crate::Surface`] call, so it always
/// matches what the host was told.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VisualState {
    /// Horizontal list offset in pixels (`-index * item_width`)
    pub offset: f32,
    /// Per-item "passed" markers
    pub passed: Vec<bool>,
    /// Disabled state of the previous control, `None` without controls
    pub previous_disabled: Option<bool>,
    /// Disabled state of the next control, `None` without controls
    pub next_disabled: Option<bool>,
    /// Whether the grabbing class is on the content wrapper
    pub grabbing: bool,
    /// Pointer-event delivery on items
    pub item_pointer_events: PointerEvents,
    /// Touch action last set on the root, cleared by geometry resets
    pub touch_action: Option<String>,
    /// Tallest title height last published
    pub title_height: f32,
}

impl VisualState {
    pub(crate) fn new(item_count: usize, has_controls: bool) -> Self {
        Self {
            passed: vec![false; item_count],
            previous_disabled: has_controls.then_some(false),
            next_disabled: has_controls.then_some(false),
            ..Self::default()
        }
    }

    /// Positions of the items currently marked passed.
    pub fn passed_items(&self) -> Vec<usize> {
        self.passed
            .iter()
            .enumerate()
            .filter_map(|(i, &passed)| passed.then_some(i))
            .collect()
    }
}
