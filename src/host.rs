//! Capability interfaces between the controller and its rendering host.
//!
//! The controller never touches a document directly. Each carousel owns one
//! host value that measures geometry and receives visual mutations; a DOM
//! binding, a native toolkit adapter, or a recording mock in tests all plug
//! in the same way.

/// One of the optional arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
}

/// Whether items receive pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvents {
    /// Items are inert (set while a drag is moving)
    None,
    /// Items receive pointer events normally
    #[default]
    All,
}

/// Geometry measurement and layout publishing.
pub trait Geometry {
    /// Drop any inline overrides on the root so natural sizes are measured.
    fn reset_root_style(&mut self);

    /// Width of one item. Items are assumed to share a width.
    fn measure_item_width(&self) -> f32;

    /// Rendered height of the title element of the item at `item`.
    fn measure_title_height(&self, item: usize) -> f32;

    /// Publish a layout variable, in pixels, for the styling layer.
    fn set_layout_variable(&mut self, name: &str, px: f32);
}

/// Sink for every visual mutation the controller makes.
pub trait Surface {
    /// Horizontal offset of the item list.
    fn set_list_offset(&mut self, px: f32);

    /// Toggle a state class on one item.
    fn set_item_class(&mut self, item: usize, class: &str, on: bool);

    /// Toggle a state class on the content wrapper.
    fn set_content_class(&mut self, class: &str, on: bool);

    /// Enable or disable pointer-event delivery on all items.
    fn set_items_pointer_events(&mut self, events: PointerEvents);

    /// Set the root's touch action.
    fn set_touch_action(&mut self, value: &str);

    /// Enable or disable an arrow control.
    fn set_control_disabled(&mut self, control: Control, disabled: bool);
}

/// Everything a carousel needs from its host.
pub trait CarouselHost: Geometry + Surface {}

impl<T: Geometry + Surface> CarouselHost for T {}
