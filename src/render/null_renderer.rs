use crate::error::CarouselResult;
use crate::render::{CarouselFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch an inconsistent
/// view-model before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<CarouselFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
