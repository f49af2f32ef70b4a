pub mod fixed_layout;
pub mod measurement;
pub mod offset;
pub mod types;

pub use fixed_layout::FixedLayout;
pub use measurement::{LayoutHost, MeasurementCache, MeasurementProvider};
pub use offset::{DEFAULT_ITEM_MARGIN_PX, PageGeometry};
pub use types::{CarouselMode, ScrollDirection};
