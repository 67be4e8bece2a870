use crate::foundation::core::clamp01;
use crate::frame::model::Frame;

/// Row count of a level-meter frame.
pub const VU_ROWS: usize = 7;

/// Render per-column levels as a bottom-up bar meter.
///
/// Each level is clamped into `[0, 1]` and lights `floor(level * 7)` cells from the bottom. Lit
/// cells are brightest near the top of the meter: 1.0 in the top 30% of rows, 0.8 down to 60%,
/// 0.6 below. Columns without a level stay dark; extra levels are ignored.
pub fn vu_meter(columns: usize, levels: &[f64]) -> Frame {
    let mut frame = Frame::empty(VU_ROWS, columns);
    let rows_f = VU_ROWS as f64;

    for (col, &level) in levels.iter().take(columns).enumerate() {
        let height = (clamp01(level) * rows_f).floor() as usize;
        for row in 0..VU_ROWS {
            let from_bottom = VU_ROWS - 1 - row;
            if from_bottom >= height {
                continue;
            }
            let row_f = row as f64;
            let brightness = if row_f < rows_f * 0.3 {
                1.0
            } else if row_f < rows_f * 0.6 {
                0.8
            } else {
                0.6
            };
            // In range by construction.
            let _ = frame.set(row, col, brightness);
        }
    }
    frame
}
