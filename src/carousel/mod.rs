//! The carousel controller.
//!
//! One [`Carousel`] exists per discovered group and owns all of that group's
//! state: the current index, the measured item width and the gesture state
//! machine. Visuals are only ever derived from that state in
//! `navigation::render`, and every mutation flows through [`Carousel::go_to`].
//!
//! ## Modules
//!
//! - `geometry` - measuring item width and title heights on construction/resize
//! - `navigation` - index clamping, rendering, arrow steps
//! - `discovery` - building controllers from the host's group descriptors

mod discovery;
mod geometry;
mod navigation;

pub use discovery::{GroupDescriptor, GroupKind, init_carousels};
pub use navigation::Direction;

use crate::config::CarouselConfig;
use crate::constants::DISPATCH_BUDGET_MS;
use crate::error::{CarouselError, CarouselResult};
use crate::events::{CarouselEvent, EventResponse};
use crate::host::{CarouselHost, Control};
use crate::input::GestureState;
use crate::profile_scope;
use crate::visual::VisualState;
use std::time::Instant;

/// Interaction controller for one paginated carousel.
#[derive(Debug)]
pub struct Carousel<H> {
    pub(crate) host: H,
    pub(crate) config: CarouselConfig,
    pub(crate) item_count: usize,
    pub(crate) has_controls: bool,
    pub(crate) current_index: usize,
    pub(crate) item_width: f32,
    pub(crate) gesture: GestureState,
    pub(crate) visual: VisualState,
}

impl<H: CarouselHost> Carousel<H> {
    /// Build a controller, measure its geometry and render index 0.
    ///
    /// Fails only for an empty group or an invalid configuration.
    pub fn new(
        host: H,
        item_count: usize,
        has_controls: bool,
        config: CarouselConfig,
    ) -> CarouselResult<Self> {
        config.validate()?;
        if item_count == 0 {
            return Err(CarouselError::NoItems);
        }

        let mut carousel = Self {
            host,
            config,
            item_count,
            has_controls,
            current_index: 0,
            item_width: 0.0,
            gesture: GestureState::Idle,
            visual: VisualState::new(item_count, has_controls),
        };
        carousel.recompute();
        carousel.go_to(0);

        tracing::debug!(
            items = item_count,
            controls = has_controls,
            item_width = carousel.item_width,
            "Carousel constructed"
        );
        Ok(carousel)
    }

    /// Dispatch one input event.
    ///
    /// `now` drives the suppression window; any deadline that has passed is
    /// applied before the event is handled.
    pub fn handle_event(&mut self, event: CarouselEvent, now: Instant) -> EventResponse {
        profile_scope!("handle_event", DISPATCH_BUDGET_MS);

        self.tick(now);
        tracing::trace!(?event, state = self.gesture.name(), "Carousel event");

        match event {
            CarouselEvent::Resize => {
                self.recompute();
                EventResponse::ignored()
            }
            CarouselEvent::PointerDown { x, target } => self.on_pointer_down(x, target),
            CarouselEvent::PointerMove { x } => self.on_pointer_move(x),
            CarouselEvent::PointerUp { x } => self.on_pointer_up(x, now),
            CarouselEvent::PointerCancel => self.on_pointer_cancel(),
            CarouselEvent::Wheel { delta_x, delta_y } => self.on_wheel(delta_x, delta_y),
            CarouselEvent::ItemClick(item) => self.on_item_click(item),
            CarouselEvent::PreviousClick => self.on_control_click(Control::Previous),
            CarouselEvent::NextClick => self.on_control_click(Control::Next),
        }
    }

    /// Apply the scheduled end of the suppression window if it is due.
    ///
    /// Hosts arm a one-shot timer for [`Carousel::next_deadline`] and call
    /// this when it fires. Returns true if the gesture state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let released = self.gesture.tick(now);
        if released {
            tracing::trace!("Click suppression released");
        }
        released
    }

    /// When the host should next call [`Carousel::tick`], if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.gesture.deadline()
    }
}

impl<H> Carousel<H> {
    /// Zero-based index of the leading item
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of items; fixed for the controller's lifetime
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Last measured item width in pixels
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Whether the group provided arrow controls
    pub fn has_controls(&self) -> bool {
        self.has_controls
    }

    /// Current gesture state
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Visual state last pushed to the host
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. for a host whose measurements changed.
    /// Follow up with a `Resize` event to re-measure.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
