//! Geometry primitives and the records produced by a placement pass.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether two rectangles overlap.
    ///
    /// Boundaries are inclusive: rectangles that only share an edge still
    /// intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }
}

/// Insets applied around the whole section of items.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Space above the first item of every column
    pub top: f32,
    /// Space left of the first column
    pub left: f32,
    /// Space below the tallest column
    pub bottom: f32,
    /// Space right of the last column
    pub right: f32,
}

impl EdgeInsets {
    /// Insets with no space on any side.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create insets from explicit values.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on all four sides.
    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub(crate) fn sides(&self) -> [(&'static str, f32); 4] {
        [
            ("section_inset.top", self.top),
            ("section_inset.left", self.left),
            ("section_inset.bottom", self.bottom),
            ("section_inset.right", self.right),
        ]
    }
}

/// Final frame of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Index of the item in the host's sequence
    pub item_index: usize,
    /// Column the item was placed in (0-indexed)
    pub column: usize,
    /// Frame in container coordinates
    pub frame: Rect,
}

/// Output of one placement pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// One record per item, in item order
    pub placements: Vec<PlacementRecord>,
    /// Width of the scrollable content (the container width)
    pub content_width: f32,
    /// Height of the scrollable content
    pub content_height: f32,
}

impl LayoutResult {
    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the pass placed no items.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements whose frame intersects `rect`, in item order.
    pub fn intersecting<'result>(
        &'result self,
        rect: &'result Rect,
    ) -> impl Iterator<Item = &'result PlacementRecord> + 'result {
        self.placements
            .iter()
            .filter(move |record| record.frame.intersects(rect))
    }
}
