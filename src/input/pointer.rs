//! Pointer drag gestures - press, move, release.
//!
//! A release resolves the gesture against the drag threshold: beyond it the
//! carousel steps once and the trailing click is suppressed for a short
//! window; within it nothing navigates and the click goes through as usual.

use crate::carousel::{Carousel, Direction};
use crate::events::{EventResponse, PointerTarget};
use crate::host::{CarouselHost, PointerEvents};
use std::time::Instant;

/// Classify a drag from `start` to `end` (horizontal pixels).
///
/// A net leftward drag beyond `threshold` moves forward, a net rightward one
/// moves backward. The threshold is exclusive: a drag of exactly `threshold`
/// pixels resolves to `None`, i.e. a click.
pub fn resolve_drag(start: f32, end: f32, threshold: f32) -> Option<Direction> {
    if start > end + threshold {
        Some(Direction::Forward)
    } else if start < end - threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

impl<H: CarouselHost> Carousel<H> {
    pub(crate) fn on_pointer_down(&mut self, x: f32, target: PointerTarget) -> EventResponse {
        // Arrow clicks must never turn into drags.
        if let Some(control) = target.control() {
            tracing::trace!(?control, "Pointer down on control, not dragging");
            return EventResponse::ignored();
        }

        self.gesture.begin_drag(x);
        self.set_grabbing(true);
        self.host.set_touch_action(&self.config.touch_action);
        self.visual.touch_action = Some(self.config.touch_action.clone());

        tracing::trace!(start_x = x, "Drag started");
        EventResponse::ignored()
    }

    pub(crate) fn on_pointer_move(&mut self, x: f32) -> EventResponse {
        if !self.gesture.is_dragging() {
            return EventResponse::ignored();
        }

        if self.gesture.track_move(x) {
            self.set_item_pointer_events(PointerEvents::None);
        }
        EventResponse::prevent_default()
    }

    pub(crate) fn on_pointer_up(&mut self, x: f32, now: Instant) -> EventResponse {
        // A release with no matching press (e.g. one that started on a
        // control) must not navigate a second time.
        let Some(start_x) = self.gesture.finish_drag() else {
            tracing::trace!("Pointer up without an active drag");
            return EventResponse::ignored();
        };

        let direction = resolve_drag(start_x, x, self.config.drag_threshold_px);
        if let Some(direction) = direction {
            self.step(direction);
        }

        self.set_grabbing(false);
        self.set_item_pointer_events(PointerEvents::All);

        if direction.is_some() {
            self.gesture
                .suppress_until(now + self.config.suppression_delay());
        }

        tracing::debug!(
            start_x,
            end_x = x,
            ?direction,
            index = self.current_index,
            "Drag resolved"
        );

        EventResponse {
            prevent_default: false,
            navigated: direction.is_some(),
        }
    }

    pub(crate) fn on_pointer_cancel(&mut self) -> EventResponse {
        if self.gesture.finish_drag().is_some() {
            self.set_grabbing(false);
            self.set_item_pointer_events(PointerEvents::All);
            tracing::debug!("Drag cancelled");
        }
        EventResponse::ignored()
    }

    fn set_grabbing(&mut self, on: bool) {
        self.host.set_content_class(&self.config.grabbing_class, on);
        self.visual.grabbing = on;
    }

    fn set_item_pointer_events(&mut self, events: PointerEvents) {
        self.host.set_items_pointer_events(events);
        self.visual.item_pointer_events = events;
    }
}
