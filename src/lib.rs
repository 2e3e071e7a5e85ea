//! Headless controller for paginated, horizontally scrolling carousels.
//!
//! A host (a DOM binding, a native toolkit, a test double) finds the groups
//! on its page, wraps each one in something implementing [`Geometry`] and
//! [`Surface`], and hands them to [`init_carousels`]. From then on it forwards
//! resize, pointer, wheel and click events to [`Carousel::handle_event`] and
//! calls [`Carousel::tick`] when [`Carousel::next_deadline`] comes due.
//!
//! ```ignore
//! let mut carousels = carousel::init_carousels(groups, &CarouselConfig::default())?;
//! let response = carousels[0].handle_event(CarouselEvent::Wheel { delta_x: 40.0, delta_y: 2.0 }, Instant::now());
//! ```

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod host;
pub mod input;
pub mod logging;
pub mod perf;
pub mod visual;

pub use carousel::{Carousel, Direction, GroupDescriptor, GroupKind, init_carousels};
pub use config::CarouselConfig;
pub use error::{CarouselError, CarouselResult, ConfigError};
pub use events::{CarouselEvent, EventResponse, PointerTarget};
pub use host::{CarouselHost, Control, Geometry, PointerEvents, Surface};
pub use input::GestureState;
pub use visual::VisualState;
