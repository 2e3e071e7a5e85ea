//! Navigation - clamp the index and derive every visual from it.

use super::Carousel;
use crate::host::{CarouselHost, Control};

/// One discrete step along the item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the last item
    Forward,
    /// Towards the first item
    Backward,
}

impl<H: CarouselHost> Carousel<H> {
    /// Move to `target`, clamped to `[0, item_count - 1]`.
    ///
    /// Always re-renders, even when the clamped index is unchanged, so the
    /// visuals catch up with any geometry change.
    pub fn go_to(&mut self, target: isize) {
        let last = isize::try_from(self.item_count - 1).unwrap_or(isize::MAX);
        let clamped = target.clamp(0, last);
        if clamped != target {
            tracing::trace!(requested = target, clamped, "Navigation clamped to boundary");
        }

        // Non-negative after the clamp.
        self.current_index = clamped as usize;
        tracing::debug!(index = self.current_index, "Carousel navigated");
        self.render();
    }

    /// Move one step in `direction`.
    pub fn step(&mut self, direction: Direction) {
        let current = self.current_index as isize;
        match direction {
            Direction::Forward => self.go_to(current + 1),
            Direction::Backward => self.go_to(current - 1),
        }
    }

    pub fn next(&mut self) {
        self.step(Direction::Forward);
    }

    pub fn previous(&mut self) {
        self.step(Direction::Backward);
    }

    /// Push the offset, passed markers and control states to the host.
    pub(crate) fn render(&mut self) {
        let index = self.current_index;

        let offset = 0.0 - index as f32 * self.item_width;
        self.host.set_list_offset(offset);
        self.visual.offset = offset;

        for item in 0..self.item_count {
            let passed = item < index;
            self.host
                .set_item_class(item, &self.config.passed_class, passed);
            self.visual.passed[item] = passed;
        }

        if self.has_controls {
            let at_start = index == 0;
            let at_end = index == self.item_count - 1;
            self.host.set_control_disabled(Control::Previous, at_start);
            self.host.set_control_disabled(Control::Next, at_end);
            self.visual.previous_disabled = Some(at_start);
            self.visual.next_disabled = Some(at_end);
        }
    }
}
