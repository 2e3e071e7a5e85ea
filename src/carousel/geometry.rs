//! Geometry measurement - uniform item width and title height.

use super::Carousel;
use crate::constants::RECOMPUTE_BUDGET_MS;
use crate::host::CarouselHost;
use crate::profile_scope;

impl<H: CarouselHost> Carousel<H> {
    /// Re-measure the carousel and re-render the current position.
    ///
    /// Runs on construction and on every resize. Clearing the root's inline
    /// style first lets natural sizes come through; the tallest title is then
    /// published so every title reserves the same vertical space.
    pub fn recompute(&mut self) {
        profile_scope!("recompute", RECOMPUTE_BUDGET_MS);

        self.host.reset_root_style();
        self.visual.touch_action = None;

        self.item_width = self.host.measure_item_width().max(0.0);

        let max_title_height = (0..self.item_count)
            .map(|item| self.host.measure_title_height(item))
            .fold(0.0_f32, f32::max);

        self.host
            .set_layout_variable(&self.config.title_height_variable, max_title_height);
        self.visual.title_height = max_title_height;

        tracing::debug!(
            item_width = self.item_width,
            title_height = max_title_height,
            "Carousel geometry recomputed"
        );

        // The previous offset was computed from the old width.
        self.render();
    }
}
