//! Error type shared by palette construction, emission and parsing.

use thiserror::Error;

/// Everything that can go wrong between a palette source and a header.
///
/// Emission is a pure transform, so none of these are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A color string is not strict lowercase `#rrggbb`.
    #[error("invalid color format: {value:?} (expected lowercase #rrggbb)")]
    InvalidColorFormat { value: String },

    /// A base color, window-scheme role or default index is missing.
    #[error("incomplete palette: {reason}")]
    IncompletePalette { reason: String },

    /// The palette document itself could not be read.
    #[error("palette source: {0}")]
    Source(String),
}

impl PaletteError {
    pub(crate) fn invalid(value: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
        }
    }

    pub(crate) fn incomplete(reason: impl Into<String>) -> Self {
        Self::IncompletePalette {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;
