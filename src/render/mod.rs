mod frame;
mod null_renderer;

pub use frame::{CarouselFrame, ItemView};
pub use null_renderer::NullRenderer;

use crate::error::CarouselResult;

/// Contract implemented by any rendering backend (template layer).
///
/// Backends receive a fully materialized `CarouselFrame` so markup generation
/// remains isolated from positioning and navigation logic.
pub trait Renderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()>;
}
