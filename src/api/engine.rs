use std::time::Duration;

use tracing::debug;

use crate::core::{LayoutHost, MeasurementCache, PageGeometry, measurement::sanitize_width};
use crate::error::CarouselResult;
use crate::extensions::CarouselListener;
use crate::interaction::ResizeDebouncer;
use crate::render::Renderer;

use super::{CarouselConfig, CarouselState};

/// Main orchestration facade consumed by host applications.
///
/// `CarouselEngine` owns the navigation state, the measurement cache, the
/// resize debouncer and the registered listeners, and drives the renderer and
/// the layout host.
pub struct CarouselEngine<R: Renderer, H: LayoutHost> {
    pub(super) renderer: R,
    pub(super) host: H,
    pub(super) config: CarouselConfig,
    pub(super) state: CarouselState,
    pub(super) cache: MeasurementCache,
    pub(super) resize: ResizeDebouncer,
    pub(super) listeners: Vec<Box<dyn CarouselListener>>,
}

impl<R: Renderer, H: LayoutHost> CarouselEngine<R, H> {
    /// Builds the engine and settles the initial position.
    ///
    /// Reads the item count and viewport width from `host`, measures every
    /// item once, then slides to the configured index (clamped into range).
    pub fn new(renderer: R, host: H, config: CarouselConfig) -> Self {
        let config = config.normalized();
        let state = CarouselState::initial(config.index, config.mode);
        let resize = ResizeDebouncer::new(Duration::from_millis(config.resize_quiet_period_ms));

        let mut engine = Self {
            renderer,
            host,
            config,
            state,
            cache: MeasurementCache::default(),
            resize,
            listeners: Vec::new(),
        };

        engine.setup_items();
        engine.cache.prime_all(&engine.host);
        if let Some(last) = engine.state.last_index() {
            engine.state.index = engine.state.index.min(last);
        } else {
            engine.state.index = 0;
        }
        engine.state.prev_control_disabled = engine.state.index == 0;
        debug!(
            index = engine.state.index,
            total_items = engine.state.total_items,
            mode = %engine.state.mode,
            "carousel initialized"
        );
        engine.perform_slide(engine.state.index as i64);
        engine
    }

    pub(super) fn setup_items(&mut self) {
        self.state.total_items = self.host.item_count();
        self.cache.reset(self.state.total_items);
        self.update_container_width();
    }

    pub(super) fn update_container_width(&mut self) {
        self.state.container_width = sanitize_width(self.host.viewport_width());
    }

    pub(super) fn page_geometry(&self) -> PageGeometry {
        PageGeometry::new(self.state.total_items, self.state.container_width)
            .with_item_margin(self.config.item_margin_px)
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.state.index
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.state.total_items
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn measurement_cache(&self) -> &MeasurementCache {
        &self.cache
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to let a test fixture change widths.
    ///
    /// Changes become visible after the next resize apply or `sync_items`.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders the current state through the backend.
    pub fn render(&mut self) -> CarouselResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }
}
