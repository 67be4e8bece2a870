use crate::animation::ease::Easing;
use crate::animation::tween::{TweenSplice, splice_tween};
use crate::editor::history::History;
use crate::editor::onion::{OnionLayer, OnionSkin, OnionSkinMode};
use crate::foundation::core::{Fps, GridSize, Palette, clamp01};
use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::{Frame, PixelUpdate};
use crate::frame::sequence::Animation;
use crate::paint::fill::flood_fill;
use crate::playback::clock::PlaybackConfig;

/// Highest frame rate the editor accepts.
pub const EDITOR_MAX_FPS: u32 = 30;

/// What a click on a cell does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// Paint the cell with the brush brightness.
    #[default]
    Brush,
    /// Turn the cell off.
    Eraser,
    /// Flood the cell's region with the brush brightness.
    Fill,
}

/// The whole editing session: the animation plus every piece of UI-independent state.
///
/// All operations are plain methods on an owned value. Structural edits never leave the
/// current index pointing past the end of the animation.
///
/// History is explicit: call [`EditorState::checkpoint`] before an edit (or before the first
/// cell of a brush stroke) to make it undoable.
#[derive(Clone, Debug)]
pub struct EditorState {
    animation: Animation,
    current: usize,
    fps: Fps,
    playing: bool,
    paused: bool,
    looping: bool,
    palette: Palette,
    tool: Tool,
    brush_brightness: f64,
    tween_easing: Easing,
    selection: Vec<usize>,
    onion_skin: OnionSkin,
    history: History<Animation>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_animation(Animation::default())
    }
}

impl EditorState {
    /// A fresh 9x9 session with one empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session editing `animation`, starting at frame 0.
    pub fn with_animation(animation: Animation) -> Self {
        Self {
            animation,
            current: 0,
            fps: Fps::default(),
            playing: false,
            paused: false,
            looping: true,
            palette: Palette::default(),
            tool: Tool::default(),
            brush_brightness: 1.0,
            tween_easing: Easing::default(),
            selection: Vec::new(),
            onion_skin: OnionSkin::default(),
            history: History::default(),
        }
    }

    /// The animation being edited.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Index of the frame being edited.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The frame being edited.
    pub fn current_frame(&self) -> &Frame {
        &self.animation.frames()[self.current]
    }

    /// Grid dimensions shared by every frame.
    pub fn grid_size(&self) -> GridSize {
        self.animation.size()
    }

    /// Select the frame to edit; clamped into range.
    pub fn set_current_index(&mut self, index: usize) {
        self.current = index.min(self.animation.len() - 1);
    }

    /// Playback rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Set the playback rate, clamped into `[1, EDITOR_MAX_FPS]`.
    pub fn set_fps(&mut self, fps: f64) {
        self.fps = Fps::clamped(fps, EDITOR_MAX_FPS);
    }

    /// Whether playback is on.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether playback is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether playback wraps around.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Flip playback on or off; always clears the paused flag. A single-frame animation cannot
    /// play. Returns the new playing flag.
    pub fn toggle_playing(&mut self) -> bool {
        if self.animation.len() <= 1 {
            self.playing = false;
        } else {
            self.playing = !self.playing;
            self.paused = false;
        }
        self.playing
    }

    /// Set the paused flag.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip wrap-around. Returns the new flag.
    pub fn toggle_loop(&mut self) -> bool {
        self.looping = !self.looping;
        self.looping
    }

    /// Playback settings derived from the session.
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            fps: self.fps,
            looping: self.looping,
            ..PlaybackConfig::default()
        }
    }

    /// Insert an empty frame after the current one and select it.
    pub fn add_frame(&mut self) -> GlowgridResult<()> {
        let size = self.grid_size();
        self.insert_after_current(Frame::empty(size.rows, size.cols))
    }

    /// Insert a copy of the current frame after it and select the copy.
    pub fn duplicate_frame(&mut self) -> GlowgridResult<()> {
        let copy = self.current_frame().clone();
        self.insert_after_current(copy)
    }

    fn insert_after_current(&mut self, frame: Frame) -> GlowgridResult<()> {
        self.animation.insert(self.current + 1, frame)?;
        self.current += 1;
        Ok(())
    }

    /// Delete the current frame and select the one before it. The last frame is kept; returns
    /// whether a frame was removed.
    pub fn delete_frame(&mut self) -> bool {
        if self.animation.len() <= 1 {
            return false;
        }
        if self.animation.remove(self.current).is_err() {
            return false;
        }
        self.current = self.current.saturating_sub(1);
        true
    }

    /// Replace the animation with `frames` and rewind to frame 0.
    ///
    /// The grid size follows the first frame. Empty or mixed-size input is rejected without
    /// touching the session.
    pub fn load_frames(&mut self, frames: Vec<Frame>) -> GlowgridResult<()> {
        self.animation = Animation::new(frames)?;
        self.current = 0;
        Ok(())
    }

    /// Replace the animation with a single frame.
    pub fn load_pattern(&mut self, pattern: Frame) -> GlowgridResult<()> {
        self.load_frames(vec![pattern])
    }

    /// Resize every frame: new cells are 0, cells outside the new grid are dropped.
    pub fn set_grid_size(&mut self, rows: usize, cols: usize) -> GlowgridResult<()> {
        self.animation.resize(GridSize::checked(rows, cols)?)
    }

    /// Display colours.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the display colours.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Change the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Brightness painted by the brush and fill tools.
    pub fn brush_brightness(&self) -> f64 {
        self.brush_brightness
    }

    /// Set the brush brightness, clamped into `[0, 1]`.
    pub fn set_brush_brightness(&mut self, brightness: f64) {
        self.brush_brightness = clamp01(brightness);
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        &mut self.animation.frames_mut()[self.current]
    }

    /// Write one cell of the current frame.
    pub fn set_pixel(&mut self, row: usize, col: usize, value: f64) -> GlowgridResult<()> {
        self.current_frame_mut().set(row, col, value)
    }

    /// Apply a batch of writes to the current frame as one edit. Returns how many were applied.
    pub fn apply_updates(&mut self, updates: &[PixelUpdate]) -> usize {
        self.current_frame_mut().apply_updates(updates)
    }

    /// Turn every cell of the current frame off.
    pub fn clear_frame(&mut self) {
        let size = self.grid_size();
        *self.current_frame_mut() = Frame::empty(size.rows, size.cols);
    }

    /// Set every cell of the current frame to the brush brightness.
    pub fn fill_frame(&mut self) {
        let size = self.grid_size();
        let value = self.brush_brightness;
        *self.current_frame_mut() = Frame::filled(size.rows, size.cols, value);
    }

    /// Use the active tool on `(row, col)` of the current frame. Returns how many cells changed
    /// value.
    pub fn apply_tool(&mut self, row: usize, col: usize) -> GlowgridResult<usize> {
        let value = match self.tool {
            Tool::Brush => self.brush_brightness,
            Tool::Eraser => 0.0,
            Tool::Fill => {
                let updates = flood_fill(self.current_frame(), row, col, self.brush_brightness)?;
                return Ok(self.apply_updates(&updates));
            }
        };
        let before = self
            .current_frame()
            .get(row, col)
            .ok_or_else(|| GlowgridError::out_of_bounds(row, col, self.grid_size()))?;
        self.set_pixel(row, col, value)?;
        Ok(usize::from(before != value))
    }

    /// Selected frame indices, in selection order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Select exactly one frame.
    pub fn select_frame(&mut self, index: usize) {
        self.selection = vec![index];
    }

    /// Add `index` to the selection, or remove it if already selected.
    pub fn toggle_frame_selection(&mut self, index: usize) {
        if let Some(pos) = self.selection.iter().position(|&i| i == index) {
            self.selection.remove(pos);
        } else {
            self.selection.push(index);
        }
    }

    /// Select every index between `a` and `b` inclusive, ascending.
    pub fn select_frame_range(&mut self, a: usize, b: usize) {
        self.selection = (a.min(b)..=a.max(b)).collect();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Easing used by [`EditorState::generate_tween`].
    pub fn tween_easing(&self) -> Easing {
        self.tween_easing
    }

    /// Change the tween easing.
    pub fn set_tween_easing(&mut self, easing: Easing) {
        self.tween_easing = easing;
    }

    /// Replace the frames between two keyframes with `count` generated in-betweens.
    ///
    /// Clears the selection when frames were inserted. See [`splice_tween`] for no-op cases.
    pub fn generate_tween(
        &mut self,
        from_index: usize,
        to_index: usize,
        count: usize,
    ) -> GlowgridResult<Option<TweenSplice>> {
        let spliced = splice_tween(
            &mut self.animation,
            from_index,
            to_index,
            count,
            self.tween_easing,
        )?;
        if spliced.is_some() {
            self.selection.clear();
            self.set_current_index(self.current);
        }
        Ok(spliced)
    }

    /// Move a frame; the current index follows the frame it pointed at. Clears the selection.
    pub fn reorder_frames(&mut self, from: usize, to: usize) -> GlowgridResult<()> {
        if from == to {
            return Ok(());
        }
        self.animation.reorder(from, to)?;
        let cur = self.current;
        self.current = if cur == from {
            to
        } else if from < cur && to >= cur {
            cur - 1
        } else if from > cur && to <= cur {
            cur + 1
        } else {
            cur
        };
        self.selection.clear();
        Ok(())
    }

    /// Onion-skin settings.
    pub fn onion_skin(&self) -> &OnionSkin {
        &self.onion_skin
    }

    /// Enable or disable onion skinning.
    pub fn set_onion_skin_enabled(&mut self, enabled: bool) {
        self.onion_skin.enabled = enabled;
    }

    /// Flip onion skinning. Returns the new flag.
    pub fn toggle_onion_skin(&mut self) -> bool {
        self.onion_skin.enabled = !self.onion_skin.enabled;
        self.onion_skin.enabled
    }

    /// Set ghost opacities as percentages; each is clamped into `[0, 100]`.
    pub fn set_onion_skin_opacity(&mut self, previous: f64, next: f64) {
        self.onion_skin.set_opacity(previous, next);
    }

    /// Choose which neighbours are ghosted.
    pub fn set_onion_skin_mode(&mut self, mode: OnionSkinMode) {
        self.onion_skin.mode = mode;
    }

    /// Ghost layers around the current frame.
    pub fn onion_skin_layers(&self) -> Vec<OnionLayer<'_>> {
        self.onion_skin.layers(&self.animation, self.current)
    }

    /// Record the current animation so the next edit can be undone.
    pub fn checkpoint(&mut self) {
        self.history.checkpoint(self.animation.clone());
        tracing::debug!(depth = self.history.len(), "history checkpoint");
    }

    /// Restore the newest checkpoint. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let Some(restored) = self.history.undo(self.animation.clone()) else {
            return false;
        };
        self.restore(restored);
        true
    }

    /// Re-apply the most recently undone edit. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        let Some(restored) = self.history.redo(self.animation.clone()) else {
            return false;
        };
        self.restore(restored);
        true
    }

    /// Whether [`EditorState::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`EditorState::redo`] would change anything.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn restore(&mut self, animation: Animation) {
        self.animation = animation;
        self.set_current_index(self.current);
        tracing::debug!(
            frames = self.animation.len(),
            undo = self.history.len(),
            "history restored"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
