use crate::foundation::core::{GridSize, clamp01};
use crate::foundation::error::{GlowgridError, GlowgridResult};

/// One still image on the pixel matrix: a `rows x cols` grid of brightness values in `[0, 1]`.
///
/// Cells are stored row-major in a single buffer, so `Clone` is always a deep copy. Every
/// constructor and setter clamps into `[0, 1]`.
///
/// Serialized as a nested JSON array (`[[0, 0.5, 1], ...]`). A frame with no rows has no way to
/// record its column count and loads back as `0x0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Frame {
    size: GridSize,
    cells: Vec<f64>,
}

/// A single cell write produced by batch operations such as flood fill.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PixelUpdate {
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
    /// Value to store (clamped on apply).
    pub value: f64,
}

impl Frame {
    /// An all-zero frame.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// A frame with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            size: GridSize::new(rows, cols),
            cells: vec![clamp01(value); rows * cols],
        }
    }

    /// Build a frame from nested rows.
    ///
    /// Rows must all have the same length. Values are clamped into `[0, 1]`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> GlowgridResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GlowgridError::validation(format!(
                    "frame row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend(row.iter().copied().map(clamp01));
        }
        Ok(Self {
            size: GridSize::new(rows.len(), cols),
            cells,
        })
    }

    /// Grid dimensions.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Read a cell, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.size
            .contains(row, col)
            .then(|| self.cells[row * self.size.cols + col])
    }

    /// Write a cell (clamped).
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> GlowgridResult<()> {
        if !self.size.contains(row, col) {
            return Err(GlowgridError::out_of_bounds(row, col, self.size));
        }
        self.cells[row * self.size.cols + col] = clamp01(value);
        Ok(())
    }

    /// Apply a batch of writes in order, skipping any outside the grid.
    ///
    /// Returns the number of writes applied.
    pub fn apply_updates(&mut self, updates: &[PixelUpdate]) -> usize {
        let mut applied = 0;
        for u in updates {
            if self.size.contains(u.row, u.col) {
                self.cells[u.row * self.size.cols + u.col] = clamp01(u.value);
                applied += 1;
            }
        }
        applied
    }

    /// Iterate rows as slices. A 0-column frame still yields one empty slice per row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let cols = self.size.cols;
        (0..self.size.rows).map(move |r| &self.cells[r * cols..(r + 1) * cols])
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(<[f64]>::to_vec).collect()
    }

    /// A copy resized to `rows x cols`: cells outside the old grid read as 0, cells outside the
    /// new grid are dropped.
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        let mut out = Self::empty(rows, cols);
        for r in 0..rows.min(self.size.rows) {
            for c in 0..cols.min(self.size.cols) {
                out.cells[r * cols + c] = self.cells[r * self.size.cols + c];
            }
        }
        out
    }

    /// Equality within `tolerance` per cell. Frames of different sizes are never equal.
    pub fn approx_eq(&self, other: &Frame, tolerance: f64) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    pub(crate) fn ensure_same_size(&self, other: &Frame) -> GlowgridResult<()> {
        if self.size != other.size {
            return Err(GlowgridError::dimension_mismatch(self.size, other.size));
        }
        Ok(())
    }

    pub(crate) fn from_cells(size: GridSize, cells: Vec<f64>) -> Self {
        debug_assert_eq!(cells.len(), size.cell_count());
        Self { size, cells }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Frame {
    type Error = GlowgridError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Frame> for Vec<Vec<f64>> {
    fn from(frame: Frame) -> Self {
        frame.to_rows()
    }
}

/// An all-zero frame.
pub fn empty_frame(rows: usize, cols: usize) -> Frame {
    Frame::empty(rows, cols)
}

/// A deep, independent copy of `frame`.
pub fn clone_frame(frame: &Frame) -> Frame {
    frame.clone()
}

/// A copy of `frame` padded with zeros or truncated to `rows x cols`.
pub fn resize_frame(frame: &Frame, rows: usize, cols: usize) -> Frame {
    frame.resized(rows, cols)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/model.rs"]
mod tests;
