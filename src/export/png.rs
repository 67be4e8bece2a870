use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::Frame;

/// Render `frame` as a grayscale RGBA image with `cell_px` square pixels per cell.
pub fn frame_to_image(frame: &Frame, cell_px: u32) -> GlowgridResult<image::RgbaImage> {
    if cell_px == 0 {
        return Err(GlowgridError::validation("cell size must be >= 1 pixel"));
    }
    let dim = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(cell_px))
            .ok_or_else(|| GlowgridError::validation("preview image too large"))
    };
    let (width, height) = (dim(frame.cols())?, dim(frame.rows())?);

    Ok(image::RgbaImage::from_fn(width, height, |x, y| {
        let v = frame
            .get((y / cell_px) as usize, (x / cell_px) as usize)
            .unwrap_or(0.0);
        let level = (v * 255.0).round() as u8;
        image::Rgba([level, level, level, 255])
    }))
}

/// Encode the [`frame_to_image`] preview as PNG bytes.
pub fn frame_to_png(frame: &Frame, cell_px: u32) -> GlowgridResult<Vec<u8>> {
    let img = frame_to_image(frame, cell_px)?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png preview")?;
    Ok(buf)
}

/// Write the PNG preview to `path`.
pub fn save_png(frame: &Frame, cell_px: u32, path: impl AsRef<Path>) -> GlowgridResult<()> {
    let path = path.as_ref();
    let bytes = frame_to_png(frame, cell_px)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
