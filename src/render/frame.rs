use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{CarouselError, CarouselResult};

/// View-model for one carousel item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub index: usize,
    pub content: String,
    pub html_attributes: IndexMap<String, String>,
}

/// Backend-agnostic view-model for one carousel draw pass.
///
/// Classes are ordered: base class, mode modifier, then the caller's class.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    pub index: usize,
    pub total_items: usize,
    pub prev_control_disabled: bool,
    pub next_control_disabled: bool,
    pub aria_label_prev: Option<String>,
    pub aria_label_next: Option<String>,
    pub classes: SmallVec<[String; 3]>,
    pub html_attributes: IndexMap<String, String>,
    pub items: Vec<ItemView>,
    pub translate_x: f64,
}

impl CarouselFrame {
    pub fn validate(&self) -> CarouselResult<()> {
        if self.total_items > 0 && self.index >= self.total_items {
            return Err(CarouselError::InvalidFrame(format!(
                "index {} out of range for {} items",
                self.index, self.total_items
            )));
        }

        if self.classes.iter().any(|class| class.trim().is_empty()) {
            return Err(CarouselError::InvalidFrame(
                "class tokens must not be empty".to_owned(),
            ));
        }

        if !self.translate_x.is_finite() {
            return Err(CarouselError::InvalidFrame(
                "translate_x must be finite".to_owned(),
            ));
        }

        Ok(())
    }

    /// Space-separated class attribute value.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use smallvec::smallvec;

    use super::CarouselFrame;

    fn frame() -> CarouselFrame {
        CarouselFrame {
            index: 0,
            total_items: 2,
            prev_control_disabled: true,
            next_control_disabled: false,
            aria_label_prev: None,
            aria_label_next: None,
            classes: smallvec!["carousel".to_owned(), "carousel--continuous".to_owned()],
            html_attributes: IndexMap::new(),
            items: Vec::new(),
            translate_x: 0.0,
        }
    }

    #[test]
    fn valid_frame_passes() {
        let frame = frame();
        assert!(frame.validate().is_ok());
        assert_eq!(frame.class_attribute(), "carousel carousel--continuous");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut frame = frame();
        frame.index = 2;
        assert!(frame.validate().is_err());
    }

    #[test]
    fn blank_class_is_rejected() {
        let mut frame = frame();
        frame.classes.push("  ".to_owned());
        assert!(frame.validate().is_err());
    }

    #[test]
    fn non_finite_translation_is_rejected() {
        let mut frame = frame();
        frame.translate_x = f64::NAN;
        assert!(frame.validate().is_err());
    }
}
