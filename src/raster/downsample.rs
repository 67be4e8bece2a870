use crate::foundation::core::{GridSize, round2};
use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::Frame;
use crate::raster::svg::{SUPERSAMPLE, VectorImage, render_supersampled};

/// Post-processing applied to each reduced cell.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Cells darker than this are forced to exactly 0. Clamped into `[0, 0.5]`.
    pub threshold: f64,
    /// Flip brightness (`1 - v`) before thresholding.
    pub invert: bool,
    /// Keep graded brightness; when `false`, cells above 0.5 become 1 and the rest 0.
    pub smooth: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            invert: false,
            smooth: true,
        }
    }
}

/// Rec. 601 luma of an RGB pixel on a 0-255 scale.
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Mean "ink" of every `factor x factor` block: dark pixels are strokes and map to high
/// brightness (`ink = 1 - L/255`). No post-processing is applied.
pub fn cell_ink(rgba8: &[u8], size: GridSize, factor: u32) -> GlowgridResult<Vec<f64>> {
    let factor = factor as usize;
    if factor == 0 {
        return Err(GlowgridError::validation("supersample factor must be >= 1"));
    }
    let width = size.cols * factor;
    let expected = width * size.rows * factor * 4;
    if rgba8.len() != expected {
        return Err(GlowgridError::validation(format!(
            "raster has {} bytes, expected {expected} for {size} cells at {factor}x",
            rgba8.len()
        )));
    }

    let samples = (factor * factor) as f64;
    let mut out = Vec::with_capacity(size.cell_count());
    for row in 0..size.rows {
        for col in 0..size.cols {
            let (x0, y0) = (col * factor, row * factor);
            let mut total = 0.0;
            for y in y0..y0 + factor {
                let line = &rgba8[(y * width + x0) * 4..(y * width + x0 + factor) * 4];
                for px in line.chunks_exact(4) {
                    total += 1.0 - luminance(px[0], px[1], px[2]) / 255.0;
                }
            }
            out.push(total / samples);
        }
    }
    Ok(out)
}

/// Invert, threshold, optionally binarize and round one reduced cell.
pub fn finish_cell(ink: f64, opts: &RasterOptions) -> f64 {
    let threshold = opts.threshold.clamp(0.0, 0.5);
    let mut v = if opts.invert { 1.0 - ink } else { ink };
    if v < threshold {
        v = 0.0;
    } else if !opts.smooth {
        v = if v > 0.5 { 1.0 } else { 0.0 };
    }
    round2(v.clamp(0.0, 1.0))
}

/// Reduce a supersampled RGBA8 raster to a `size` frame.
pub fn downsample(
    rgba8: &[u8],
    size: GridSize,
    factor: u32,
    opts: &RasterOptions,
) -> GlowgridResult<Frame> {
    let cells = cell_ink(rgba8, size, factor)?
        .into_iter()
        .map(|ink| finish_cell(ink, opts))
        .collect();
    Ok(Frame::from_cells(size, cells))
}

/// Convert a vector image into a `rows x cols` brightness frame.
///
/// The image is stretched over a white surface `SUPERSAMPLE` times larger than the grid on each
/// axis, then each cell's block of pixels is box-averaged into an ink value and finished with
/// `opts`. Black-on-white artwork produces lit cells where the strokes are.
#[tracing::instrument(skip(image))]
pub fn rasterize(
    image: &VectorImage,
    rows: usize,
    cols: usize,
    opts: RasterOptions,
) -> GlowgridResult<Frame> {
    let size = GridSize::checked(rows, cols)?;
    let raster = render_supersampled(image, rows, cols)?;
    let frame = downsample(&raster.rgba8, size, SUPERSAMPLE, &opts)?;
    tracing::debug!(
        lit = frame.cells().iter().filter(|&&v| v > 0.0).count(),
        "rasterized vector image"
    );
    Ok(frame)
}

/// Parse `svg` and rasterize it. A document that fails to parse produces no frame.
pub fn svg_to_frame(
    svg: &str,
    rows: usize,
    cols: usize,
    opts: RasterOptions,
) -> GlowgridResult<Frame> {
    let image = VectorImage::parse(svg)?;
    rasterize(&image, rows, cols, opts)
}

/// Square rasterization used for icon previews.
pub fn preview_icon(svg: &str, size: usize, opts: RasterOptions) -> GlowgridResult<Frame> {
    svg_to_frame(svg, size, size, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/downsample.rs"]
mod tests;
