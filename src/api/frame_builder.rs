use smallvec::{SmallVec, smallvec};

use crate::core::LayoutHost;
use crate::render::{CarouselFrame, ItemView, Renderer};

use super::CarouselEngine;

/// Base class carried by every carousel root.
pub const CAROUSEL_BASE_CLASS: &str = "carousel";

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    /// Ordered root classes: base, mode modifier, caller class.
    #[must_use]
    pub fn classes(&self) -> SmallVec<[String; 3]> {
        let mut classes: SmallVec<[String; 3]> = smallvec![
            CAROUSEL_BASE_CLASS.to_owned(),
            format!("{CAROUSEL_BASE_CLASS}--{}", self.state.mode),
        ];
        if let Some(class) = self.config.class.as_deref() {
            classes.push(class.to_owned());
        }
        classes
    }

    /// Materializes the view-model consumed by the render layer.
    #[must_use]
    pub fn build_frame(&self) -> CarouselFrame {
        let items = self
            .config
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                index,
                content: item.content.clone(),
                html_attributes: item.html_attributes.clone(),
            })
            .collect();

        CarouselFrame {
            index: self.state.index,
            total_items: self.state.total_items,
            prev_control_disabled: self.state.prev_control_disabled,
            next_control_disabled: self.state.next_control_disabled,
            aria_label_prev: self.config.aria_label_prev.clone(),
            aria_label_next: self.config.aria_label_next.clone(),
            classes: self.classes(),
            html_attributes: self.config.html_attributes.clone(),
            items,
            translate_x: self.state.translate_x,
        }
    }
}
