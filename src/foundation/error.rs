use crate::foundation::core::GridSize;

/// Convenience result type used across glowgrid.
pub type GlowgridResult<T> = Result<T, GlowgridError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlowgridError {
    /// Two grids that must share dimensions do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensions of the reference grid.
        expected: GridSize,
        /// Dimensions of the offending grid.
        found: GridSize,
    },

    /// A cell coordinate lies outside its grid.
    #[error("out of bounds: cell ({row}, {col}) outside {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// A vector document could not be parsed or rendered.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid caller-provided parameters or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowgridError {
    /// Build a [`GlowgridError::DimensionMismatch`] value.
    pub fn dimension_mismatch(expected: GridSize, found: GridSize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Build a [`GlowgridError::OutOfBounds`] value for a cell checked against `size`.
    pub fn out_of_bounds(row: usize, col: usize, size: GridSize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            rows: size.rows,
            cols: size.cols,
        }
    }

    /// Build a [`GlowgridError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GlowgridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowgridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
