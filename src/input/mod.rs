//! Pointer, wheel and click input handling for a carousel.
//!
//! Three independent sources turn into navigation calls:
//!
//! - `pointer` - press/move/release drag gestures, resolved against a threshold
//! - `wheel` - horizontal wheel or trackpad deltas, one step per event
//! - `click` - item and arrow-control clicks
//!
//! ## Architecture
//!
//! Gesture tracking uses an explicit state machine (`GestureState`) so the
//! difference between a click and a drag, and the short window in which a
//! drag's trailing click is swallowed, are visible in one enum.

mod click;
mod pointer;
mod state;
mod wheel;

pub use pointer::resolve_drag;
pub use state::GestureState;
pub use wheel::wheel_step;
