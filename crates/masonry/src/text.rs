//! Text-backed height oracle.
//!
//! Wraps each item's text greedily at UAX #14 break opportunities using a
//! fixed per-character advance, then rounds the block height up to whole
//! pixels. This trades shaping accuracy for a deterministic measurement that
//! needs no font data.

use serde::{Deserialize, Serialize};
use unicode_linebreak::{BreakOpportunity, linebreaks};

use crate::error::MissingItem;
use crate::provider::ItemHeightProvider;

/// Font metrics used for text measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Horizontal advance of every character
    pub char_width: f32,
    /// Height of one line
    pub line_height: f32,
}

impl Default for TextMetrics {
    /// Roughly a 17px proportional UI font.
    fn default() -> Self {
        Self {
            char_width: 8.5,
            line_height: 20.0,
        }
    }
}

impl TextMetrics {
    /// Width of a run, ignoring trailing whitespace.
    fn run_width(self, run: &str) -> f32 {
        run.trim_end().chars().count() as f32 * self.char_width
    }

    /// Number of lines `text` occupies when wrapped at `max_width`.
    ///
    /// A word wider than the line is kept whole and overflows.
    pub fn line_count(self, text: &str, max_width: f32) -> usize {
        if text.is_empty() {
            return 0;
        }

        let mut lines = 0;
        let mut line_start = 0;
        let mut last_fit = 0;

        for (idx, opportunity) in linebreaks(text) {
            let candidate = &text[line_start..idx];
            if last_fit > line_start && self.run_width(candidate) > max_width {
                // Commit everything up to the previous opportunity.
                lines += 1;
                line_start = last_fit;
            }
            last_fit = idx;

            if matches!(opportunity, BreakOpportunity::Mandatory) {
                lines += 1;
                line_start = idx;
            }
        }

        // Text always ends with a mandatory opportunity; guard anyway.
        if line_start < text.len() {
            lines += 1;
        }
        lines
    }

    /// Height of `text` wrapped at `max_width`, rounded up to whole pixels.
    pub fn text_height(self, text: &str, max_width: f32) -> f32 {
        (self.line_count(text, max_width) as f32 * self.line_height).ceil()
    }
}

/// Measures items by the height of their text.
#[derive(Debug, Clone, Copy)]
pub struct TextHeightProvider<'texts, S> {
    texts: &'texts [S],
    metrics: TextMetrics,
}

impl<'texts, S: AsRef<str>> TextHeightProvider<'texts, S> {
    /// Create a provider over `texts` using `metrics`.
    pub fn new(texts: &'texts [S], metrics: TextMetrics) -> Self {
        Self { texts, metrics }
    }

    /// Number of items with text.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether there are no texts.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl<S: AsRef<str>> ItemHeightProvider for TextHeightProvider<'_, S> {
    type Error = MissingItem;

    fn height_for_item(&self, index: usize, width: f32) -> Result<f32, Self::Error> {
        let text = self.texts.get(index).ok_or(MissingItem {
            index,
            len: self.texts.len(),
        })?;
        Ok(self.metrics.text_height(text.as_ref(), width))
    }
}
