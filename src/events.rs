//! Input events consumed by the controller.

use crate::host::Control;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The "previous" arrow control
    Previous,
    /// The "next" arrow control
    Next,
    /// An item, by position
    Item(usize),
    /// Anything else inside the root
    Other,
}

impl PointerTarget {
    /// Returns the control hit, if any. Drags never start on a control.
    pub fn control(self) -> Option<Control> {
        match self {
            Self::Previous => Some(Control::Previous),
            Self::Next => Some(Control::Next),
            _ => None,
        }
    }
}

/// Events the host forwards to a carousel.
///
/// Pointer coordinates are horizontal client positions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// The viewport was resized
    Resize,
    /// Pointer pressed on the root
    PointerDown { x: f32, target: PointerTarget },
    /// Pointer moved over the root
    PointerMove { x: f32 },
    /// Pointer released over the root
    PointerUp { x: f32 },
    /// The platform took the pointer away (e.g. native vertical pan started)
    PointerCancel,
    /// Wheel or trackpad delta over the content wrapper
    Wheel { delta_x: f32, delta_y: f32 },
    /// Click on an item, by position
    ItemClick(usize),
    /// Click on the "previous" control
    PreviousClick,
    /// Click on the "next" control
    NextClick,
}

/// What the host should do after dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the platform's default handling of the event
    pub prevent_default: bool,
    /// The event went through navigation (the index may be unchanged if clamped)
    pub navigated: bool,
}

impl EventResponse {
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn navigated() -> Self {
        Self {
            prevent_default: false,
            navigated: true,
        }
    }

    pub(crate) fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            navigated: false,
        }
    }
}
