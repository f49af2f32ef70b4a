//! carousel-rs: headless horizontal item carousel engine.
//!
//! The crate computes width-aware paging for a fixed-width viewport, keeps
//! prev/next controls in sync with the reachable boundaries and settles the
//! list translation after resizes. Markup, measurement and event delivery
//! stay with the host behind small traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselEngine};
pub use error::{CarouselError, CarouselResult};
