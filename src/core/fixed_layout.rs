use std::cell::Cell;

use crate::core::{LayoutHost, MeasurementProvider};

/// In-memory layout host for headless usage and tests.
///
/// Widths are whatever the caller says they are; translations are recorded
/// instead of applied to a real element.
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    viewport_width: f64,
    item_widths: Vec<f64>,
    translations: Vec<f64>,
    measure_calls: Cell<usize>,
}

impl FixedLayout {
    #[must_use]
    pub fn new(viewport_width: f64, item_widths: Vec<f64>) -> Self {
        Self {
            viewport_width,
            item_widths,
            translations: Vec::new(),
            measure_calls: Cell::new(0),
        }
    }

    /// `count` items of identical width.
    #[must_use]
    pub fn uniform(viewport_width: f64, item_width: f64, count: usize) -> Self {
        Self::new(viewport_width, vec![item_width; count])
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Updates one item's width; out-of-range indexes are ignored.
    pub fn set_item_width(&mut self, index: usize, width: f64) {
        if let Some(slot) = self.item_widths.get_mut(index) {
            *slot = width;
        }
    }

    pub fn push_item(&mut self, width: f64) {
        self.item_widths.push(width);
    }

    pub fn truncate_items(&mut self, len: usize) {
        self.item_widths.truncate(len);
    }

    #[must_use]
    pub fn translations(&self) -> &[f64] {
        &self.translations
    }

    #[must_use]
    pub fn last_translate_x(&self) -> Option<f64> {
        self.translations.last().copied()
    }

    /// Number of item-width reads served so far.
    #[must_use]
    pub fn measure_calls(&self) -> usize {
        self.measure_calls.get()
    }
}

impl MeasurementProvider for FixedLayout {
    fn item_count(&self) -> usize {
        self.item_widths.len()
    }

    fn viewport_width(&self) -> Option<f64> {
        Some(self.viewport_width)
    }

    fn item_width(&self, index: usize) -> Option<f64> {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.item_widths.get(index).copied()
    }
}

impl LayoutHost for FixedLayout {
    fn apply_translate_x(&mut self, px: f64) {
        self.translations.push(px);
    }
}
