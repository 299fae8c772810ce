//! Column-balancing placement pass.
//!
//! Every item goes into the column whose running height is currently the
//! smallest. Ties go to the lowest column index, which makes the pass fully
//! deterministic for a given set of heights.

use crate::config::LayoutConfiguration;
use crate::error::LayoutError;
use crate::provider::ItemHeightProvider;
use crate::types::{LayoutResult, PlacementRecord, Rect};

/// Running heights of every column during one pass.
///
/// Each accumulator holds the next free y-position of its column.
#[derive(Debug, Clone)]
struct ColumnState {
    accumulators: Vec<f32>,
}

impl ColumnState {
    fn new(column_count: usize, top: f32) -> Self {
        Self {
            accumulators: vec![top; column_count],
        }
    }

    fn shortest(&self) -> usize {
        shortest_column(&self.accumulators)
    }

    fn next_y(&self, column: usize) -> f32 {
        self.accumulators[column]
    }

    fn advance(&mut self, column: usize, bottom: f32, line_spacing: f32) {
        self.accumulators[column] = bottom + line_spacing;
    }

    fn tallest(&self) -> f32 {
        self.accumulators.iter().copied().fold(0.0, f32::max)
    }
}

/// Index of the column with the strictly smallest height.
///
/// Ties resolve to the lowest index. Returns 0 for an empty slice.
pub fn shortest_column(heights: &[f32]) -> usize {
    let mut index = 0;
    let mut best = heights.first().copied().unwrap_or(0.0);
    for (column, &height) in heights.iter().enumerate().skip(1) {
        if height < best {
            best = height;
            index = column;
        }
    }
    index
}

/// Run one placement pass.
///
/// The configuration must already have passed
/// [`LayoutConfiguration::validate`]; this function does not cache anything.
///
/// # Errors
/// Returns [`LayoutError::HeightProvider`] if the provider fails and
/// [`LayoutError::InvalidHeight`] if it reports a negative or non-finite
/// height. No partial result is returned in either case.
pub fn place_items<P>(
    item_count: usize,
    config: &LayoutConfiguration,
    provider: &P,
) -> Result<LayoutResult, LayoutError<P::Error>>
where
    P: ItemHeightProvider + ?Sized,
{
    let geometry = config.column_geometry();
    let inset = config.section_inset;

    tracing::debug!(
        "place_items: {} items in {} columns, cell_width={:.1}px, measurement_width={:.1}px",
        item_count,
        config.column_count,
        geometry.cell_width,
        geometry.measurement_width
    );

    let mut columns = ColumnState::new(config.column_count, inset.top);
    let mut placements = Vec::with_capacity(item_count);

    for index in 0..item_count {
        let column = columns.shortest();
        let measured = provider
            .height_for_item(index, geometry.measurement_width)
            .map_err(LayoutError::HeightProvider)?;
        if !(measured.is_finite() && measured >= 0.0) {
            return Err(LayoutError::InvalidHeight {
                index,
                height: measured,
            });
        }

        let frame = Rect::new(
            config.column_x(column, geometry.cell_width),
            columns.next_y(column),
            geometry.cell_width,
            measured + config.cell_padding,
        );
        columns.advance(column, frame.max_y(), config.line_spacing);
        placements.push(PlacementRecord {
            item_index: index,
            column,
            frame,
        });
    }

    // An empty layout still reserves a viewport worth of scroll space.
    let content_height = if item_count == 0 {
        config.fallback_viewport_height + inset.bottom
    } else {
        columns.tallest() + inset.bottom
    };

    tracing::debug!("place_items: content height {:.1}px", content_height);

    Ok(LayoutResult {
        placements,
        content_width: config.container_width,
        content_height,
    })
}
