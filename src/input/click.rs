//! Item and arrow-control clicks.

use crate::carousel::{Carousel, Direction};
use crate::events::EventResponse;
use crate::host::{CarouselHost, Control};

impl<H: CarouselHost> Carousel<H> {
    /// Jump straight to a clicked item unless a drag just ended.
    pub(crate) fn on_item_click(&mut self, item: usize) -> EventResponse {
        if self.gesture.is_suppressed() {
            tracing::debug!(item, "Swallowing click that ended a drag");
            return EventResponse::ignored();
        }

        self.go_to(isize::try_from(item).unwrap_or(isize::MAX));
        EventResponse::navigated()
    }

    pub(crate) fn on_control_click(&mut self, control: Control) -> EventResponse {
        if !self.has_controls {
            tracing::trace!(?control, "Control click on a carousel without controls");
            return EventResponse::ignored();
        }

        match control {
            Control::Previous => self.step(Direction::Backward),
            Control::Next => self.step(Direction::Forward),
        }
        EventResponse::navigated()
    }
}
