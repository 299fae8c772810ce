//! Masonry layout engine.
//!
//! Places an ordered sequence of items into a fixed number of columns, always
//! filling the currently shortest column first, and caches the resulting
//! frames until the host invalidates them. A viewport query then returns only
//! the cached frames that intersect a visible rectangle.
//!
//! The engine holds no reference to its host: the host pushes a
//! [`LayoutConfiguration`] and an [`ItemHeightProvider`] into
//! [`MasonryLayout::compute`] and pulls results back out.

// Geometry primitives and result records
mod types;
pub use types::{EdgeInsets, LayoutResult, PlacementRecord, Rect};

// Error types
mod error;
pub use error::{ConfigError, LayoutError, MissingItem};

// Configuration, defaults and host overrides
mod config;
pub use config::{
    ColumnGeometry, DEFAULT_CELL_PADDING, DEFAULT_COLUMN_COUNT, DEFAULT_INSET, DEFAULT_SPACING,
    LayoutConfiguration, LayoutOverrides,
};

// Height oracles
mod provider;
pub use provider::{FixedHeights, ItemHeightProvider, TryHeightFn};

// Text measurement oracle
mod text;
pub use text::{TextHeightProvider, TextMetrics};

// Column-balancing placement pass
mod placement;
pub use placement::{place_items, shortest_column};

// Cached engine
mod engine;
pub use engine::{LayoutState, MasonryLayout};
