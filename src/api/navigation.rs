use tracing::{debug, trace, warn};

use crate::core::{CarouselMode, LayoutHost, ScrollDirection};
use crate::extensions::CarouselEvent;
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    /// Moves forward by one page (continuous) or one item (discrete).
    ///
    /// `carousel-next` is emitted even when already at the last item.
    pub fn handle_next(&mut self) {
        self.emit_event(CarouselEvent::Next);

        let Some(last_index) = self.state.last_index() else {
            return;
        };
        let index = self.state.index;
        if index == last_index {
            trace!(index, "next ignored at last item");
            return;
        }

        let step = match self.state.mode {
            CarouselMode::Continuous => self.scroll_offset_from(index, ScrollDirection::Forward),
            CarouselMode::Discrete => 1,
        };
        let new_index = index.saturating_add(step).min(last_index);
        self.commit_index(new_index);
    }

    /// Moves backward by one page (continuous) or one item (discrete).
    ///
    /// `carousel-prev` is emitted even when already at the first item.
    pub fn handle_prev(&mut self) {
        self.emit_event(CarouselEvent::Prev);

        let index = self.state.index;
        if index == 0 {
            trace!("prev ignored at first item");
            return;
        }

        let step = match self.state.mode {
            CarouselMode::Continuous => self.scroll_offset_from(index, ScrollDirection::Backward),
            CarouselMode::Discrete => 1,
        };
        self.commit_index(index.saturating_sub(step));
    }

    /// External index setter; runs the same slide logic as navigation.
    ///
    /// Out-of-range requests are ignored.
    pub fn set_index(&mut self, index: i64) {
        self.perform_slide(index);
    }

    fn commit_index(&mut self, index: usize) {
        if index == self.state.index {
            trace!(index, "navigation step resolved to the current index");
            return;
        }
        debug!(from = self.state.index, to = index, "carousel index committed");
        self.state.index = index;
        self.perform_slide(index as i64);
    }

    /// Slides to `index` and refreshes the controls when `index` is in range.
    pub fn perform_slide(&mut self, index: i64) {
        if !self.state.contains(index) {
            debug!(
                index,
                total_items = self.state.total_items,
                "ignoring out-of-range slide request"
            );
            return;
        }

        self.state.index = index as usize;
        self.move_to_index(index);
        self.update_controls();
    }

    /// Computes the page stop for `index` and translates the list so `index`
    /// leads the viewport.
    ///
    /// Out-of-range indexes are clamped into the state and nothing else
    /// happens in that call.
    pub fn move_to_index(&mut self, index: i64) {
        let total_items = self.state.total_items;
        if index < 0 {
            self.state.index = 0;
            return;
        }
        let Some(index) = usize::try_from(index).ok().filter(|i| *i < total_items) else {
            self.state.index = total_items.saturating_sub(1);
            return;
        };

        let end_index = index + self.scroll_offset_from(index, ScrollDirection::Forward) + 1;
        self.state.stop = if end_index > total_items {
            total_items
        } else {
            end_index - 1
        };

        // FIXME: assumes the whole set fits one page; a carousel that was moved
        // away from 0 by a discrete step keeps its old translation here.
        if index == 0 && self.state.stop == total_items {
            trace!("all items fit the viewport, translation skipped");
            return;
        }

        let geometry = self.page_geometry();
        let (cache, host) = (&mut self.cache, &self.host);
        let width_before_index = geometry.width_before(index, |i| cache.width_of(i, host));
        let offset = geometry.trailing_offset(width_before_index, index, end_index, |i| {
            cache.width_of(i, host)
        });

        let translate_x = -width_before_index + offset;
        trace!(index, end_index, stop = self.state.stop, translate_x, "translating item list");
        self.state.translate_x = translate_x;
        self.host.apply_translate_x(translate_x);
        self.emit_event(CarouselEvent::Translate);
    }

    /// Derives both control flags from the current state and re-renders.
    pub fn update_controls(&mut self) {
        let stop_target = self.state.mode.next_stop_target(self.state.total_items);
        self.state.prev_control_disabled = self.state.index == 0;
        self.state.next_control_disabled = self.state.stop == stop_target;
        self.request_render();
    }

    /// Whole items that fit from `index` walking in `direction`.
    pub fn scroll_offset(&mut self, index: i64, direction: ScrollDirection) -> usize {
        let geometry = self.page_geometry();
        let start = isize::try_from(index).unwrap_or(isize::MIN);
        let (cache, host) = (&mut self.cache, &self.host);
        geometry.scroll_offset(start, direction, |i| cache.width_of(i, host))
    }

    fn scroll_offset_from(&mut self, index: usize, direction: ScrollDirection) -> usize {
        self.scroll_offset(index as i64, direction)
    }

    pub(super) fn request_render(&mut self) {
        if let Err(err) = self.render() {
            warn!(error = %err, "carousel render failed");
        }
    }
}
