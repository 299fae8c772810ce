//! Errors reported by the layout engine.

use std::error::Error;
use std::fmt;

/// A layout configuration that cannot produce a valid placement pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Column count was zero.
    ZeroColumns,
    /// Container width was zero, negative or not finite.
    NonPositiveWidth(f32),
    /// A spacing, inset or padding value was negative or not finite.
    InvalidValue {
        /// Configuration field name
        field: &'static str,
        /// Offending value
        value: f32,
    },
    /// Insets and spacing leave no horizontal room for a cell.
    NoUsableWidth {
        /// Computed cell width
        cell_width: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "column count must be at least 1"),
            Self::NonPositiveWidth(width) => {
                write!(f, "container width must be positive, got {width}")
            }
            Self::InvalidValue { field, value } => {
                write!(f, "{field} must be a non-negative finite number, got {value}")
            }
            Self::NoUsableWidth { cell_width } => write!(
                f,
                "insets and spacing leave no room for cells (cell width {cell_width})"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Failure of a placement pass.
///
/// `E` is the error type of the height provider; it is carried through
/// unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError<E> {
    /// The configuration was rejected before any item was placed.
    InvalidConfiguration(ConfigError),
    /// The height provider failed.
    HeightProvider(E),
    /// The height provider returned a negative or non-finite height.
    InvalidHeight {
        /// Item whose height was rejected
        index: usize,
        /// Returned height
        height: f32,
    },
}

impl<E> From<ConfigError> for LayoutError<E> {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

impl<E: fmt::Display> fmt::Display for LayoutError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "invalid layout configuration: {err}"),
            Self::HeightProvider(err) => write!(f, "height provider failed: {err}"),
            Self::InvalidHeight { index, height } => {
                write!(f, "item {index} reported an invalid height {height}")
            }
        }
    }
}

impl<E: Error + 'static> Error for LayoutError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::HeightProvider(err) => Some(err),
            Self::InvalidHeight { .. } => None,
        }
    }
}

/// A height was requested for an item the provider has no data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingItem {
    /// Requested item index
    pub index: usize,
    /// Number of items the provider knows about
    pub len: usize,
}

impl fmt::Display for MissingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no height data for item {} (provider holds {} items)",
            self.index, self.len
        )
    }
}

impl Error for MissingItem {}
