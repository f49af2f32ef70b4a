//! Width-aware paging math.
//!
//! All functions here are pure: item widths are read through a caller-supplied
//! closure so the same code runs against the live measurement cache, fixed
//! fixtures and property tests.

use serde::{Deserialize, Serialize};

use crate::core::ScrollDirection;

/// Inter-item spacing added after every item when summing widths.
pub const DEFAULT_ITEM_MARGIN_PX: f64 = 16.0;

/// Viewport-level inputs shared by every offset computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub total_items: usize,
    pub container_width: f64,
    pub item_margin: f64,
}

impl PageGeometry {
    #[must_use]
    pub fn new(total_items: usize, container_width: f64) -> Self {
        Self {
            total_items,
            container_width,
            item_margin: DEFAULT_ITEM_MARGIN_PX,
        }
    }

    #[must_use]
    pub fn with_item_margin(mut self, item_margin: f64) -> Self {
        self.item_margin = item_margin;
        self
    }

    /// Counts the whole items that fit in the viewport when walking from
    /// `start_index` in `direction`.
    ///
    /// The walk accumulates `width + margin` per step and stops once the
    /// remaining budget is exhausted or the index leaves `0..=total_items`.
    /// The step that overflowed the budget is not counted.
    pub fn scroll_offset<F>(
        &self,
        start_index: isize,
        direction: ScrollDirection,
        mut width_of: F,
    ) -> usize
    where
        F: FnMut(isize) -> f64,
    {
        if start_index < 0 {
            return 0;
        }

        let last_walkable = self.total_items as isize;
        let mut remaining = self.container_width;
        let mut steps = 0usize;
        let mut index = start_index;

        while remaining > 0.0 {
            if index > last_walkable || index < 0 {
                break;
            }
            remaining -= width_of(index) + self.item_margin;
            steps += 1;
            index += direction.step();
        }

        // FIXME: a zero-width viewport takes no step at all; this floors the
        // result at 0 so continuous navigation stalls instead of reversing.
        steps.saturating_sub(1)
    }

    /// Sum of `width + margin` for every item before `index`.
    pub fn width_before<F>(&self, index: usize, mut width_of: F) -> f64
    where
        F: FnMut(isize) -> f64,
    {
        (0..index)
            .map(|i| width_of(i as isize) + self.item_margin)
            .sum()
    }

    /// Extra shift that pulls a trailing partial page flush against the
    /// viewport's far edge.
    ///
    /// Non-zero only when `end_index` runs past the item set while
    /// `start_index` is still inside it.
    pub fn trailing_offset<F>(
        &self,
        width_before_start: f64,
        start_index: usize,
        end_index: usize,
        width_of: F,
    ) -> f64
    where
        F: FnMut(isize) -> f64,
    {
        if end_index > self.total_items && start_index < self.total_items {
            let width_to_end = self.width_before(end_index, width_of);
            self.container_width - (width_to_end - width_before_start) + self.item_margin
        } else {
            0.0
        }
    }
}
