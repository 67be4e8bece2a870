use crate::animation::ease::Easing;
use crate::foundation::core::clamp01;
use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::Frame;
use crate::frame::sequence::Animation;

/// Recommended ceiling on in-betweens generated per request.
pub const MAX_TWEEN_FRAMES: usize = 20;

/// Generate `count` in-between frames from `from` to `to`.
///
/// Step `i` (1-based) uses `t = easing(i / (count + 1))`, so neither endpoint is reproduced.
/// Every cell is a clamped linear blend `from + (to - from) * t`. Output is ordered from the
/// frame nearest `from` to the frame nearest `to`. Inputs are not modified.
pub fn generate_tween(
    from: &Frame,
    to: &Frame,
    count: usize,
    easing: Easing,
) -> GlowgridResult<Vec<Frame>> {
    from.ensure_same_size(to)?;
    if count == 0 {
        return Err(GlowgridError::validation("tween count must be >= 1"));
    }

    let denom = (count + 1) as f64;
    let frames = (1..=count)
        .map(|i| {
            let t = easing.apply(i as f64 / denom);
            let cells = from
                .cells()
                .iter()
                .zip(to.cells())
                .map(|(&a, &b)| clamp01(a + (b - a) * t))
                .collect();
            Frame::from_cells(from.size(), cells)
        })
        .collect();
    Ok(frames)
}

/// Where a tween landed after [`splice_tween`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenSplice {
    /// Index of the first inserted frame.
    pub insert_index: usize,
    /// Number of frames inserted.
    pub inserted: usize,
    /// Number of frames that previously sat between the keyframes and were replaced.
    pub replaced: usize,
}

/// Replace the frames strictly between two keyframes with a generated tween.
///
/// Returns `Ok(None)` without touching `animation` when `from_index >= to_index` or
/// `count == 0`. `count` is capped at [`MAX_TWEEN_FRAMES`].
pub fn splice_tween(
    animation: &mut Animation,
    from_index: usize,
    to_index: usize,
    count: usize,
    easing: Easing,
) -> GlowgridResult<Option<TweenSplice>> {
    if from_index >= to_index || count == 0 {
        return Ok(None);
    }
    let len = animation.len();
    let (Some(from), Some(to)) = (animation.get(from_index), animation.get(to_index)) else {
        return Err(GlowgridError::validation(format!(
            "tween keyframes {from_index}..{to_index} out of range for {len} frames"
        )));
    };

    let count = count.min(MAX_TWEEN_FRAMES);
    let tween = generate_tween(from, to, count, easing)?;
    let insert_index = from_index + 1;
    let replaced = to_index - from_index - 1;
    animation.splice(insert_index, replaced, tween)?;

    tracing::debug!(from_index, to_index, count, %easing, replaced, "spliced tween");
    Ok(Some(TweenSplice {
        insert_index,
        inserted: count,
        replaced,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
