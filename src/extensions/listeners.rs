use serde::{Deserialize, Serialize};

use crate::core::CarouselMode;

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselContext {
    pub index: usize,
    pub total_items: usize,
    pub mode: CarouselMode,
}

/// Named signals emitted to external listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarouselEvent {
    /// Fired on every next request, including ones that do not move.
    Next,
    /// Fired on every prev request, including ones that do not move.
    Prev,
    /// Fired after the item list translation was applied.
    Translate,
}

impl CarouselEvent {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Next => "carousel-next",
            Self::Prev => "carousel-prev",
            Self::Translate => "carousel-translate",
        }
    }
}

/// Observer interface for carousel events.
///
/// Listeners see events and read engine context without mutating carousel
/// state directly.
pub trait CarouselListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CarouselEvent, context: CarouselContext);
}
