use crate::core::LayoutHost;
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::CarouselListener;
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    /// Registers a listener with unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn CarouselListener>) -> CarouselResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(CarouselError::InvalidListener(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(CarouselError::DuplicateListener(listener_id));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }
}
