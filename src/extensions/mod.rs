//! Hooks for code living outside the engine.

mod listeners;

pub use listeners::{CarouselContext, CarouselEvent, CarouselListener};
