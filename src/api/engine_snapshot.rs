use serde::{Deserialize, Serialize};

use crate::core::LayoutHost;
use crate::error::{CarouselError, CarouselResult};
use crate::render::Renderer;

use super::{CarouselEngine, CarouselState};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub state: CarouselState,
    pub classes: Vec<String>,
    pub item_margin_px: f64,
    pub cached_widths: Vec<Option<f64>>,
    pub resize_pending: bool,
}

impl CarouselSnapshot {
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CarouselError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            state: self.state,
            classes: self.classes().into_vec(),
            item_margin_px: self.config.item_margin_px,
            cached_widths: self.cache.cached_widths().to_vec(),
            resize_pending: self.resize.is_pending(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CarouselError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
