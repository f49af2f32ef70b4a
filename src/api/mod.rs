mod carousel_config;
mod carousel_state;
mod engine;
mod engine_snapshot;
mod frame_builder;
mod listener_dispatch;
mod listener_registry;
mod navigation;
mod resize_controller;

pub use carousel_config::{CarouselConfig, CarouselItemConfig};
pub use carousel_state::CarouselState;
pub use engine::CarouselEngine;
pub use engine_snapshot::CarouselSnapshot;
pub use frame_builder::CAROUSEL_BASE_CLASS;
