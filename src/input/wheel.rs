//! Wheel and trackpad navigation.
//!
//! Each qualifying event is exactly one step, whatever its magnitude.

use crate::carousel::{Carousel, Direction};
use crate::events::EventResponse;
use crate::host::CarouselHost;

/// Map a wheel delta to a step.
///
/// Only mostly-horizontal, non-zero deltas count, so vertical page scrolling
/// passing over the carousel leaves it alone.
pub fn wheel_step(delta_x: f32, delta_y: f32) -> Option<Direction> {
    let horizontal = delta_x.abs() > delta_y.abs();
    if !horizontal || delta_x == 0.0 {
        return None;
    }

    if delta_x > 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

impl<H: CarouselHost> Carousel<H> {
    pub(crate) fn on_wheel(&mut self, delta_x: f32, delta_y: f32) -> EventResponse {
        match wheel_step(delta_x, delta_y) {
            Some(direction) => {
                self.step(direction);
                EventResponse::navigated()
            }
            None => EventResponse::ignored(),
        }
    }
}
