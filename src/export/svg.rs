use std::fmt::Write as _;

use crate::foundation::core::Palette;
use crate::frame::model::Frame;

/// Cell pitch of the exported document, in pixels.
pub const CELL_SIZE: usize = 10;
/// Space between cells, in pixels.
pub const CELL_GAP: usize = 2;
/// Cells at or below this brightness are drawn with the "off" colour.
pub const LIT_THRESHOLD: f64 = 0.05;
const OFF_OPACITY: f64 = 0.1;

/// A standalone SVG document drawing `frame` as a matrix of dots.
///
/// Lit cells use `palette.on` at an opacity equal to their brightness; the rest use
/// `palette.off` at 0.1.
pub fn frame_to_svg(frame: &Frame, palette: &Palette) -> String {
    let pitch = CELL_SIZE + CELL_GAP;
    let width = (frame.cols() * pitch).saturating_sub(CELL_GAP);
    let height = (frame.rows() * pitch).saturating_sub(CELL_GAP);
    let radius = CELL_SIZE as f64 / 2.0 * 0.9;

    let mut out = format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    out.push('\n');
    for (r, row) in frame.rows_iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            let (color, opacity) = if value > LIT_THRESHOLD {
                (palette.on.as_str(), value)
            } else {
                (palette.off.as_str(), OFF_OPACITY)
            };
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{}" opacity="{opacity}" />"#,
                c * pitch + CELL_SIZE / 2,
                r * pitch + CELL_SIZE / 2,
                escape_attr(color),
            );
        }
    }
    out.push_str("</svg>");
    out
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
