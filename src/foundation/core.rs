use std::fmt;

use crate::foundation::error::{GlowgridError, GlowgridResult};

/// Grid dimensions shared by every frame of an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
}

impl GridSize {
    /// Build a grid size without validation.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Build a grid size, rejecting zero-sized grids.
    pub fn checked(rows: usize, cols: usize) -> GlowgridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GlowgridError::validation(format!(
                "grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        Ok(Self { rows, cols })
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(9, 9)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Playback rate in frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fps(u32);

impl Fps {
    /// Lowest accepted rate.
    pub const MIN: u32 = 1;
    /// Highest accepted rate.
    pub const MAX: u32 = 60;

    /// Build a rate, rejecting values outside `[MIN, MAX]`.
    pub fn new(fps: u32) -> GlowgridResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&fps) {
            return Err(GlowgridError::validation(format!(
                "fps must be in [{}, {}], got {fps}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(fps))
    }

    /// Build a rate from an arbitrary number, clamping into `[MIN, max]`.
    ///
    /// `max` is itself clamped to [`Fps::MAX`]; non-finite input maps to `MIN`.
    pub fn clamped(fps: f64, max: u32) -> Self {
        let max = max.clamp(Self::MIN, Self::MAX);
        if !fps.is_finite() {
            return Self(Self::MIN);
        }
        Self((fps.round().max(0.0) as u32).clamp(Self::MIN, max))
    }

    /// Rate as an integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Time between two frames, in milliseconds.
    pub fn frame_interval_ms(self) -> f64 {
        1000.0 / f64::from(self.0)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(12)
    }
}

impl TryFrom<u32> for Fps {
    type Error = GlowgridError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fps> for u32 {
    fn from(value: Fps) -> Self {
        value.0
    }
}

/// Display colours for lit and unlit cells.
///
/// Colours are opaque CSS colour strings; glowgrid never parses them, it only hands them to
/// renderers and exporters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Colour of a fully lit cell.
    pub on: String,
    /// Colour of an unlit cell.
    pub off: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            on: "hsl(200, 100%, 50%)".to_owned(),
            off: "hsl(200, 20%, 20%)".to_owned(),
        }
    }
}

/// Clamp a brightness value into `[0, 1]`; NaN maps to 0.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Round to two decimal places, the precision used for generated brightness values.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
