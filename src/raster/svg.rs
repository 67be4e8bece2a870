use std::sync::{Arc, OnceLock};

use crate::foundation::error::{GlowgridError, GlowgridResult};

/// Oversampling factor applied per axis before reducing to the target grid.
pub const SUPERSAMPLE: u32 = 8;

// Larger surfaces are almost certainly a caller mistake (a 2048-cell-wide matrix).
const MAX_DIM: u32 = 16_384;

/// A decoded vector document, ready to be rasterized any number of times.
#[derive(Clone, Debug)]
pub struct VectorImage {
    tree: Arc<usvg::Tree>,
}

impl VectorImage {
    /// Parse an SVG document from text.
    pub fn parse(svg: &str) -> GlowgridResult<Self> {
        Self::from_data(svg.as_bytes())
    }

    /// Parse an SVG document from raw bytes (plain or gzip-compressed).
    pub fn from_data(bytes: &[u8]) -> GlowgridResult<Self> {
        let opts = usvg::Options {
            fontdb: font_database(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| GlowgridError::decode(format!("parse svg: {e}")))?;
        let size = tree.size();
        if !(size.width().is_finite() && size.height().is_finite())
            || size.width() <= 0.0
            || size.height() <= 0.0
        {
            return Err(GlowgridError::decode("svg has invalid width/height"));
        }
        Ok(Self {
            tree: Arc::new(tree),
        })
    }

    /// Intrinsic document size in user units.
    pub fn size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }
}

/// System fonts for `<text>` elements, loaded once per process.
fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// An opaque RGBA8 raster covering the whole target grid at `SUPERSAMPLE` resolution.
#[derive(Clone, Debug)]
pub struct SupersampledRaster {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub rgba8: Vec<u8>,
}

/// Render `image` stretched over a `cols*SUPERSAMPLE x rows*SUPERSAMPLE` white surface.
pub fn render_supersampled(
    image: &VectorImage,
    rows: usize,
    cols: usize,
) -> GlowgridResult<SupersampledRaster> {
    let width = scaled_dim(cols, "cols")?;
    let height = scaled_dim(rows, "rows")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| GlowgridError::decode("failed to allocate raster surface"))?;
    // Transparent source regions must resolve to "unlit".
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    let (w, h) = image.size();
    let xform = resvg::tiny_skia::Transform::from_scale(width as f32 / w, height as f32 / h);
    resvg::render(&image.tree, xform, &mut pixmap.as_mut());

    // Every pixel is opaque after the white fill, so premultiplied and straight RGBA agree.
    Ok(SupersampledRaster {
        width,
        height,
        rgba8: pixmap.take(),
    })
}

fn scaled_dim(cells: usize, what: &str) -> GlowgridResult<u32> {
    let px = u32::try_from(cells)
        .ok()
        .and_then(|c| c.checked_mul(SUPERSAMPLE))
        .filter(|&px| px > 0 && px <= MAX_DIM)
        .ok_or_else(|| {
            GlowgridError::validation(format!(
                "target {what} must be in [1, {}], got {cells}",
                MAX_DIM / SUPERSAMPLE
            ))
        })?;
    Ok(px)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/svg.rs"]
mod tests;
