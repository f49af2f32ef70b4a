use tracing::trace;

use crate::core::LayoutHost;
use crate::extensions::{CarouselContext, CarouselEvent};
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    pub(super) fn listener_context(&self) -> CarouselContext {
        CarouselContext {
            index: self.state.index,
            total_items: self.state.total_items,
            mode: self.state.mode,
        }
    }

    pub(super) fn emit_event(&mut self, event: CarouselEvent) {
        trace!(event = event.name(), "emitting carousel event");
        let context = self.listener_context();
        for listener in &mut self.listeners {
            listener.on_event(event, context);
        }
    }
}
