//! Cached masonry layout engine.
//!
//! The engine is either EMPTY (nothing cached) or COMPUTED (a full result for
//! one item count and configuration). `compute` moves EMPTY to COMPUTED and
//! is a no-op while COMPUTED; `invalidate` moves back to EMPTY. There is no
//! partial invalidation: any change to the item count, configuration or item
//! content requires a full recomputation.
//!
//! The engine does no locking. `compute` and `invalidate` take `&mut self`,
//! so a host sharing one engine between threads must serialize access itself.

use log::{debug, trace, warn};

use crate::config::LayoutConfiguration;
use crate::error::LayoutError;
use crate::placement::place_items;
use crate::provider::ItemHeightProvider;
use crate::types::{LayoutResult, PlacementRecord, Rect};

/// Cache state of a [`MasonryLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// No result is cached.
    Empty,
    /// A result is cached.
    Computed,
}

/// Inputs a cached result was computed for.
#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    item_count: usize,
    config: LayoutConfiguration,
}

/// Masonry layout engine with a single cached result.
#[derive(Debug, Clone, Default)]
pub struct MasonryLayout {
    cache: Option<LayoutResult>,
    computed_for: Option<CacheKey>,
}

impl MasonryLayout {
    /// Create an engine in the EMPTY state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute placements for `item_count` items, or return the cached result.
    ///
    /// The configuration is validated on every call. A cached result with at
    /// least one placement is then returned unchanged and the provider is not
    /// consulted. An empty cached result is recomputed.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidConfiguration`] if `config` is invalid,
    /// or the provider's failure. The cache is left untouched on error.
    pub fn compute<P>(
        &mut self,
        item_count: usize,
        config: &LayoutConfiguration,
        provider: &P,
    ) -> Result<&LayoutResult, LayoutError<P::Error>>
    where
        P: ItemHeightProvider + ?Sized,
    {
        config.validate()?;

        if let Some(cached) = self.cache.take_if(|cached| !cached.placements.is_empty()) {
            let requested = CacheKey {
                item_count,
                config: config.clone(),
            };
            if self.computed_for.as_ref() != Some(&requested) {
                warn!(
                    "MasonryLayout: serving cached layout for {} items, but {} were requested with a different configuration; call invalidate() after changes",
                    cached.placements.len(),
                    item_count
                );
            }
            trace!("MasonryLayout: cache hit ({} placements)", cached.placements.len());
            return Ok(self.cache.insert(cached));
        }

        let result = place_items(item_count, config, provider)?;

        debug!(
            "MasonryLayout: computed {} placements, content {:.1}x{:.1}",
            result.placements.len(),
            result.content_width,
            result.content_height
        );

        self.computed_for = Some(CacheKey {
            item_count,
            config: config.clone(),
        });
        Ok(self.cache.insert(result))
    }

    /// Drop the cached result. The next [`Self::compute`] recomputes fully.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            debug!("MasonryLayout: cache invalidated");
        }
        self.computed_for = None;
    }

    /// Cached placements whose frame intersects `rect`, in item order.
    ///
    /// Returns an empty vector while nothing is computed.
    pub fn query_visible(&self, rect: &Rect) -> Vec<PlacementRecord> {
        let Some(result) = &self.cache else {
            trace!("MasonryLayout: query_visible before compute");
            return Vec::new();
        };
        result.intersecting(rect).copied().collect()
    }

    /// Cached placement of one item.
    pub fn placement(&self, item_index: usize) -> Option<&PlacementRecord> {
        self.cache.as_ref()?.placements.get(item_index)
    }

    /// Cached `(width, height)` of the scrollable content.
    pub fn content_size(&self) -> Option<(f32, f32)> {
        self.cache
            .as_ref()
            .map(|result| (result.content_width, result.content_height))
    }

    /// The cached result, if any.
    pub fn result(&self) -> Option<&LayoutResult> {
        self.cache.as_ref()
    }

    /// Current cache state.
    pub fn state(&self) -> LayoutState {
        if self.cache.is_some() {
            LayoutState::Computed
        } else {
            LayoutState::Empty
        }
    }
}
