//! Layout configuration, defaults and host overrides.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::EdgeInsets;

/// Default inset on every side of the section.
pub const DEFAULT_INSET: f32 = 10.0;

/// Default inter-item and line spacing.
pub const DEFAULT_SPACING: f32 = 10.0;

/// Padding reserved inside every cell for its content insets.
///
/// Subtracted from the cell width before measuring and added back to the
/// measured height.
pub const DEFAULT_CELL_PADDING: f32 = 10.0;

/// Column count used when the host does not choose one.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Geometry inputs for one placement pass.
///
/// Changing any field after a pass requires
/// [`MasonryLayout::invalidate`](crate::MasonryLayout::invalidate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    /// Number of columns (at least 1)
    pub column_count: usize,
    /// Horizontal gap between adjacent columns
    pub inter_item_spacing: f32,
    /// Vertical gap between consecutive items in a column
    pub line_spacing: f32,
    /// Insets around the whole section
    pub section_inset: EdgeInsets,
    /// Width of the container the items are laid out in
    pub container_width: f32,
    /// Padding reserved inside each cell
    pub cell_padding: f32,
    /// Height reserved when there are no items to place
    pub fallback_viewport_height: f32,
}

impl LayoutConfiguration {
    /// Create a configuration with default spacing, insets and padding.
    pub fn new(column_count: usize, container_width: f32) -> Self {
        Self {
            column_count,
            inter_item_spacing: DEFAULT_SPACING,
            line_spacing: DEFAULT_SPACING,
            section_inset: EdgeInsets::uniform(DEFAULT_INSET),
            container_width,
            cell_padding: DEFAULT_CELL_PADDING,
            fallback_viewport_height: 0.0,
        }
    }

    /// Set the height reserved for an empty layout.
    #[must_use]
    pub fn with_fallback_viewport_height(mut self, height: f32) -> Self {
        self.fallback_viewport_height = height;
        self
    }

    /// Set the padding reserved inside each cell.
    #[must_use]
    pub fn with_cell_padding(mut self, padding: f32) -> Self {
        self.cell_padding = padding;
        self
    }

    /// Apply host overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &LayoutOverrides) -> Self {
        if let Some(inset) = overrides.section_inset {
            self.section_inset = inset;
        }
        if let Some(spacing) = overrides.line_spacing {
            self.line_spacing = spacing;
        }
        if let Some(spacing) = overrides.inter_item_spacing {
            self.inter_item_spacing = spacing;
        }
        self
    }

    /// Check the configuration before a pass.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_count == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(ConfigError::NonPositiveWidth(self.container_width));
        }

        let scalars = [
            ("inter_item_spacing", self.inter_item_spacing),
            ("line_spacing", self.line_spacing),
            ("cell_padding", self.cell_padding),
            ("fallback_viewport_height", self.fallback_viewport_height),
        ];
        for (field, value) in scalars.into_iter().chain(self.section_inset.sides()) {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        let geometry = self.column_geometry();
        if geometry.cell_width <= 0.0 {
            return Err(ConfigError::NoUsableWidth {
                cell_width: geometry.cell_width,
            });
        }
        Ok(())
    }

    /// Derive column and cell widths.
    ///
    /// Only meaningful for a configuration that passes [`Self::validate`].
    pub fn column_geometry(&self) -> ColumnGeometry {
        let columns = self.column_count.max(1) as f32;
        let column_width = (self.container_width - self.section_inset.horizontal()) / columns;
        // Each cell gives up its share of the gaps between columns.
        let cell_width = column_width - self.inter_item_spacing * (columns - 1.0) / columns;
        ColumnGeometry {
            column_width,
            cell_width,
            measurement_width: (cell_width - self.cell_padding).max(0.0),
        }
    }

    /// Left edge of the given column.
    pub fn column_x(&self, column: usize, cell_width: f32) -> f32 {
        (cell_width + self.inter_item_spacing).mul_add(column as f32, self.section_inset.left)
    }
}

/// Widths derived from a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    /// Container content width divided evenly between columns
    pub column_width: f32,
    /// Width of every cell frame
    pub cell_width: f32,
    /// Width handed to the height provider
    ///
    /// Clamped at 0 when the cell padding exceeds the cell width, so a
    /// provider never sees a negative width.
    pub measurement_width: f32,
}

/// Optional per-section values supplied by the host.
///
/// Each field falls back to the engine default independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    /// Section inset override
    pub section_inset: Option<EdgeInsets>,
    /// Line spacing override
    pub line_spacing: Option<f32>,
    /// Inter-item spacing override
    pub inter_item_spacing: Option<f32>,
}

impl LayoutOverrides {
    /// Resolve into a full configuration.
    pub fn resolve(&self, column_count: usize, container_width: f32) -> LayoutConfiguration {
        LayoutConfiguration::new(column_count, container_width).with_overrides(self)
    }
}
