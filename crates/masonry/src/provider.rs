//! Height oracles consulted during a placement pass.

use std::convert::Infallible;

use crate::error::MissingItem;

/// Reports the measured height of an item laid out at a given width.
///
/// Implementations must be pure: the engine skips calling the provider
/// entirely when it serves a cached result.
pub trait ItemHeightProvider {
    /// Error raised when an item cannot be measured.
    type Error;

    /// Height of item `index` when its content is `width` wide.
    ///
    /// # Errors
    /// Implementation defined; the engine forwards the error unmodified.
    fn height_for_item(&self, index: usize, width: f32) -> Result<f32, Self::Error>;
}

impl<F> ItemHeightProvider for F
where
    F: Fn(usize, f32) -> f32,
{
    type Error = Infallible;

    fn height_for_item(&self, index: usize, width: f32) -> Result<f32, Self::Error> {
        Ok(self(index, width))
    }
}

/// Adapter for closures that can fail.
#[derive(Debug, Clone, Copy)]
pub struct TryHeightFn<F>(pub F);

impl<F, E> ItemHeightProvider for TryHeightFn<F>
where
    F: Fn(usize, f32) -> Result<f32, E>,
{
    type Error = E;

    fn height_for_item(&self, index: usize, width: f32) -> Result<f32, Self::Error> {
        (self.0)(index, width)
    }
}

/// Precomputed heights that ignore the measurement width.
#[derive(Debug, Clone, Copy)]
pub struct FixedHeights<'heights>(pub &'heights [f32]);

impl ItemHeightProvider for FixedHeights<'_> {
    type Error = MissingItem;

    fn height_for_item(&self, index: usize, _width: f32) -> Result<f32, Self::Error> {
        self.0.get(index).copied().ok_or(MissingItem {
            index,
            len: self.0.len(),
        })
    }
}
