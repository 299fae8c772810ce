//! JSON layout documents read by the `masonry` tool.

use anyhow::{Result, anyhow};
use masonry_layout::{
    DEFAULT_CELL_PADDING, DEFAULT_COLUMN_COUNT, FixedHeights, LayoutConfiguration,
    LayoutOverrides, LayoutResult, MasonryLayout, PlacementRecord, Rect, TextHeightProvider,
    TextMetrics,
};
use serde::{Deserialize, Serialize};

const fn default_column_count() -> usize {
    DEFAULT_COLUMN_COUNT
}

const fn default_cell_padding() -> f32 {
    DEFAULT_CELL_PADDING
}

/// Layout request: geometry plus either precomputed heights or texts to measure.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    /// Number of columns
    #[serde(default = "default_column_count")]
    pub column_count: usize,
    /// Container width
    pub container_width: f32,
    /// Padding reserved inside each cell
    #[serde(default = "default_cell_padding")]
    pub cell_padding: f32,
    /// Height reserved when there are no items
    #[serde(default)]
    pub fallback_viewport_height: f32,
    /// Section inset and spacing overrides
    #[serde(default)]
    pub overrides: LayoutOverrides,
    /// Precomputed item heights
    #[serde(default)]
    pub heights: Option<Vec<f32>>,
    /// Item texts measured with `text_metrics`
    #[serde(default)]
    pub texts: Option<Vec<String>>,
    /// Metrics used to measure `texts`
    #[serde(default)]
    pub text_metrics: TextMetrics,
    /// Optional viewport to report visible items for
    #[serde(default)]
    pub viewport: Option<Rect>,
}

/// Output written back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Full layout result
    pub layout: LayoutResult,
    /// Placements intersecting the requested viewport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Vec<PlacementRecord>>,
}

impl LayoutDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or has unknown fields.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Resolve the engine configuration for this document.
    pub fn configuration(&self) -> LayoutConfiguration {
        self.overrides
            .resolve(self.column_count, self.container_width)
            .with_cell_padding(self.cell_padding)
            .with_fallback_viewport_height(self.fallback_viewport_height)
    }

    /// Run the engine over this document.
    ///
    /// # Errors
    /// Returns an error unless exactly one of `heights` and `texts` is set,
    /// or if the engine rejects the configuration or an item.
    pub fn run(&self) -> Result<LayoutReport> {
        let config = self.configuration();
        let mut engine = MasonryLayout::new();

        match (&self.heights, &self.texts) {
            (Some(heights), None) => {
                engine.compute(heights.len(), &config, &FixedHeights(heights.as_slice()))?;
            }
            (None, Some(texts)) => {
                let provider = TextHeightProvider::new(texts.as_slice(), self.text_metrics);
                engine.compute(provider.len(), &config, &provider)?;
            }
            (Some(_), Some(_)) => return Err(anyhow!("give either heights or texts, not both")),
            (None, None) => return Err(anyhow!("one of heights or texts is required")),
        }

        let layout = engine
            .result()
            .cloned()
            .ok_or_else(|| anyhow!("layout produced no result"))?;
        let visible = self
            .viewport
            .as_ref()
            .map(|viewport| engine.query_visible(viewport));

        log::info!(
            "Laid out {} items, content height {:.1}px",
            layout.placements.len(),
            layout.content_height
        );

        Ok(LayoutReport { layout, visible })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Heights documents lay out with defaults filled in.
    ///
    /// # Panics
    /// Panics if the document fails to parse or lay out.
    #[test]
    fn test_run_heights_document() {
        let json = br#"{
            "container_width": 300.0,
            "heights": [100.0, 50.0, 80.0],
            "viewport": { "x": 0.0, "y": 75.0, "width": 300.0, "height": 2.0 }
        }"#;
        let report = LayoutDocument::from_json(json)
            .and_then(|document| document.run())
            .ok();

        let layout_len = report.as_ref().map(|found| found.layout.placements.len());
        assert_eq!(layout_len, Some(3));
        let visible: Option<Vec<usize>> = report.and_then(|found| {
            found
                .visible
                .map(|records| records.iter().map(|record| record.item_index).collect())
        });
        // Item 0 spans 10..120 and item 2 starts at 80; item 1 ends at 70.
        assert_eq!(visible, Some(vec![0]));
    }

    /// Texts documents place one item per text.
    ///
    /// # Panics
    /// Panics if the document fails to parse or lay out.
    #[test]
    fn test_run_texts_document() {
        let json = br#"{
            "container_width": 300.0,
            "texts": ["first", "second item", "third"]
        }"#;
        let report = LayoutDocument::from_json(json)
            .and_then(|document| document.run())
            .ok();

        let indices: Option<Vec<usize>> = report.map(|found| {
            found
                .layout
                .placements
                .iter()
                .map(|record| record.item_index)
                .collect()
        });
        assert_eq!(indices, Some(vec![0, 1, 2]));
    }

    /// Overrides from the document reach the configuration.
    ///
    /// # Panics
    /// Panics if the document fails to parse.
    #[test]
    fn test_configuration_applies_overrides() {
        let json = br#"{
            "column_count": 3,
            "container_width": 400.0,
            "cell_padding": 4.0,
            "fallback_viewport_height": 640.0,
            "overrides": { "line_spacing": 2.0 },
            "texts": ["a"]
        }"#;
        let config = LayoutDocument::from_json(json)
            .map(|document| document.configuration())
            .ok();

        assert_eq!(config.as_ref().map(|found| found.column_count), Some(3));
        assert_eq!(config.as_ref().map(|found| found.line_spacing), Some(2.0));
        assert_eq!(config.as_ref().map(|found| found.inter_item_spacing), Some(10.0));
        assert_eq!(config.as_ref().map(|found| found.cell_padding), Some(4.0));
        assert_eq!(
            config.map(|found| found.fallback_viewport_height),
            Some(640.0)
        );
    }

    /// Exactly one item source must be given.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_run_requires_one_item_source() {
        let neither = LayoutDocument::from_json(br#"{ "container_width": 300.0 }"#)
            .and_then(|document| document.run());
        assert!(neither.is_err());

        let both = LayoutDocument::from_json(
            br#"{ "container_width": 300.0, "heights": [1.0], "texts": ["a"] }"#,
        )
        .and_then(|document| document.run());
        assert!(both.is_err());
    }

    /// Unknown fields and invalid geometry are reported.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_rejects_bad_documents() {
        assert!(LayoutDocument::from_json(br#"{ "container_width": 1.0, "colums": 2 }"#).is_err());

        let zero_columns = LayoutDocument::from_json(
            br#"{ "column_count": 0, "container_width": 300.0, "heights": [] }"#,
        )
        .and_then(|document| document.run());
        assert!(zero_columns.is_err());
    }
}
