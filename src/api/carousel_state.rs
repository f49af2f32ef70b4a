use serde::{Deserialize, Serialize};

use crate::core::CarouselMode;

/// Observable carousel state.
///
/// Owned and mutated exclusively by [`super::CarouselEngine`]; hosts read
/// copies of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    /// Leading visible item.
    pub index: usize,
    /// Last item considered reached by the current page; compared against the
    /// mode's stop target when deriving `next_control_disabled`.
    pub stop: usize,
    pub total_items: usize,
    pub mode: CarouselMode,
    pub prev_control_disabled: bool,
    pub next_control_disabled: bool,
    pub container_width: f64,
    /// Last horizontal translation requested from the host.
    pub translate_x: f64,
}

impl CarouselState {
    #[must_use]
    pub(super) fn initial(index: usize, mode: CarouselMode) -> Self {
        Self {
            index,
            stop: 0,
            total_items: 0,
            mode,
            prev_control_disabled: index == 0,
            next_control_disabled: false,
            container_width: 0.0,
            translate_x: 0.0,
        }
    }

    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.total_items.checked_sub(1)
    }

    #[must_use]
    pub fn contains(&self, index: i64) -> bool {
        usize::try_from(index).is_ok_and(|index| index < self.total_items)
    }
}
