use std::time::Instant;

use tracing::{debug, trace};

use crate::core::LayoutHost;
use crate::interaction::ResizeDecision;
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    /// Forwards a raw resize signal; see [`Self::notify_resize_at`].
    pub fn notify_resize(&mut self) {
        self.notify_resize_at(Instant::now());
    }

    /// Records a resize signal. The recompute runs from a later tick once the
    /// quiet window has elapsed.
    pub fn notify_resize_at(&mut self, now: Instant) {
        trace!("resize signal received");
        self.resize.notify_at(now);
    }

    /// Event-loop tick; see [`Self::tick_at`].
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Applies a pending resize when its quiet window has elapsed.
    ///
    /// Returns `true` when a resize was applied.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.resize.poll_at(now) {
            ResizeDecision::Apply { coalesced } => {
                debug!(coalesced, "applying debounced resize");
                self.handle_resize();
                true
            }
            ResizeDecision::Waiting { .. } | ResizeDecision::Idle => false,
        }
    }

    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Re-reads the viewport width, re-measures every item and replays the
    /// slide at the current index.
    pub fn handle_resize(&mut self) {
        self.update_container_width();
        self.cache.refresh_all(&self.host);
        debug!(
            container_width = self.state.container_width,
            index = self.state.index,
            "carousel resized"
        );
        self.perform_slide(self.state.index as i64);
    }

    /// Picks up a structural change of the host's item list.
    ///
    /// The current index is clamped into the new range before the slide is
    /// replayed.
    pub fn sync_items(&mut self) {
        self.setup_items();
        self.cache.prime_all(&self.host);

        let Some(last_index) = self.state.last_index() else {
            debug!("carousel emptied");
            self.state.index = 0;
            self.state.stop = 0;
            self.state.translate_x = 0.0;
            self.update_controls();
            return;
        };

        self.state.index = self.state.index.min(last_index);
        debug!(
            total_items = self.state.total_items,
            index = self.state.index,
            "carousel items synchronized"
        );
        self.perform_slide(self.state.index as i64);
    }
}
