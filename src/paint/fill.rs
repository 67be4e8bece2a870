use crate::foundation::core::clamp01;
use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::{Frame, PixelUpdate};

/// Compute the writes that flood `fill_value` over the 4-connected region containing
/// `(start_row, start_col)`.
///
/// Region membership is exact floating-point equality with the start cell's value; visually
/// identical but numerically different brightnesses are separate regions. The frame is not
/// modified: apply the returned batch with [`Frame::apply_updates`] as one edit.
///
/// `fill_value` is clamped into `[0, 1]` first. Returns an empty batch when the start cell
/// already holds it. Updates are listed in traversal order.
pub fn flood_fill(
    frame: &Frame,
    start_row: usize,
    start_col: usize,
    fill_value: f64,
) -> GlowgridResult<Vec<PixelUpdate>> {
    let fill_value = clamp01(fill_value);
    let size = frame.size();
    let Some(target) = frame.get(start_row, start_col) else {
        return Err(GlowgridError::out_of_bounds(start_row, start_col, size));
    };
    if target == fill_value {
        return Ok(Vec::new());
    }

    let cols = size.cols;
    let mut visited = vec![false; size.cell_count()];
    let mut stack = vec![(start_row, start_col)];
    let mut updates = Vec::new();

    while let Some((r, c)) = stack.pop() {
        let idx = r * cols + c;
        if visited[idx] || frame.cells()[idx] != target {
            continue;
        }
        visited[idx] = true;
        updates.push(PixelUpdate {
            row: r,
            col: c,
            value: fill_value,
        });

        if r > 0 {
            stack.push((r - 1, c));
        }
        if r + 1 < size.rows {
            stack.push((r + 1, c));
        }
        if c > 0 {
            stack.push((r, c - 1));
        }
        if c + 1 < cols {
            stack.push((r, c + 1));
        }
    }

    Ok(updates)
}

/// Flood fill into a fresh copy of `frame`, leaving the original untouched.
pub fn flood_filled(
    frame: &Frame,
    start_row: usize,
    start_col: usize,
    fill_value: f64,
) -> GlowgridResult<Frame> {
    let updates = flood_fill(frame, start_row, start_col, fill_value)?;
    let mut out = frame.clone();
    out.apply_updates(&updates);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/fill.rs"]
mod tests;
