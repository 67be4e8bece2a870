use crate::foundation::core::GridSize;
use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::Frame;

/// An ordered, non-empty sequence of same-sized frames.
///
/// The current playback or editing index is not part of the sequence; callers own it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Frame>", into = "Vec<Frame>")]
pub struct Animation {
    frames: Vec<Frame>,
}

impl Animation {
    /// Build an animation, validating that it is non-empty and uniformly sized.
    pub fn new(frames: Vec<Frame>) -> GlowgridResult<Self> {
        let Some(first) = frames.first() else {
            return Err(GlowgridError::validation(
                "animation must contain at least one frame",
            ));
        };
        let size = first.size();
        if size.rows == 0 || size.cols == 0 {
            return Err(GlowgridError::validation(format!(
                "animation frames must be at least 1x1, got {size}"
            )));
        }
        for f in &frames[1..] {
            first.ensure_same_size(f)?;
        }
        Ok(Self { frames })
    }

    /// A one-frame animation.
    pub fn single(frame: Frame) -> GlowgridResult<Self> {
        Self::new(vec![frame])
    }

    /// A one-frame animation holding an empty `size` frame.
    pub fn blank(size: GridSize) -> GlowgridResult<Self> {
        GridSize::checked(size.rows, size.cols)?;
        Self::new(vec![Frame::empty(size.rows, size.cols)])
    }

    /// Shared frame dimensions.
    pub fn size(&self) -> GridSize {
        self.frames[0].size()
    }

    /// Frame count (always at least 1).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow a frame.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    // Callers must not swap in a differently sized frame; use `replace` for that.
    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// Replace the frame at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, frame: Frame) -> GlowgridResult<Frame> {
        self.frames[0].ensure_same_size(&frame)?;
        let len = self.frames.len();
        let slot = self.frames.get_mut(index).ok_or_else(|| {
            GlowgridError::validation(format!("frame index {index} out of range for {len} frames"))
        })?;
        Ok(std::mem::replace(slot, frame))
    }

    /// Borrow all frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Consume into the frame list.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Insert `frame` at `index` (clamped to `len`).
    pub fn insert(&mut self, index: usize, frame: Frame) -> GlowgridResult<()> {
        self.frames[0].ensure_same_size(&frame)?;
        let index = index.min(self.frames.len());
        self.frames.insert(index, frame);
        Ok(())
    }

    /// Remove and return the frame at `index`. The last remaining frame cannot be removed.
    pub fn remove(&mut self, index: usize) -> GlowgridResult<Frame> {
        if self.frames.len() <= 1 {
            return Err(GlowgridError::validation(
                "cannot remove the only frame of an animation",
            ));
        }
        if index >= self.frames.len() {
            return Err(GlowgridError::validation(format!(
                "frame index {index} out of range for {} frames",
                self.frames.len()
            )));
        }
        Ok(self.frames.remove(index))
    }

    /// Replace `remove` frames starting at `start` with `insert`.
    ///
    /// Nothing is changed if any inserted frame has the wrong size or the result would be empty.
    pub fn splice(&mut self, start: usize, remove: usize, insert: Vec<Frame>) -> GlowgridResult<()> {
        for f in &insert {
            self.frames[0].ensure_same_size(f)?;
        }
        let start = start.min(self.frames.len());
        let end = start.saturating_add(remove).min(self.frames.len());
        if end - start == self.frames.len() && insert.is_empty() {
            return Err(GlowgridError::validation(
                "splice would leave the animation empty",
            ));
        }
        self.frames.splice(start..end, insert);
        Ok(())
    }

    /// Move the frame at `from` so it ends up at index `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> GlowgridResult<()> {
        let len = self.frames.len();
        if from >= len || to >= len {
            return Err(GlowgridError::validation(format!(
                "reorder {from} -> {to} out of range for {len} frames"
            )));
        }
        let moved = self.frames.remove(from);
        self.frames.insert(to, moved);
        Ok(())
    }

    /// Resize every frame to `size` (pad with zeros, or truncate).
    pub fn resize(&mut self, size: GridSize) -> GlowgridResult<()> {
        GridSize::checked(size.rows, size.cols)?;
        for f in &mut self.frames {
            *f = f.resized(size.rows, size.cols);
        }
        Ok(())
    }
}

impl Default for Animation {
    /// One empty frame on the default 9x9 grid.
    fn default() -> Self {
        let size = GridSize::default();
        Self {
            frames: vec![Frame::empty(size.rows, size.cols)],
        }
    }
}

impl TryFrom<Vec<Frame>> for Animation {
    type Error = GlowgridError;

    fn try_from(frames: Vec<Frame>) -> Result<Self, Self::Error> {
        Self::new(frames)
    }
}

impl From<Animation> for Vec<Frame> {
    fn from(anim: Animation) -> Self {
        anim.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/sequence.rs"]
mod tests;
