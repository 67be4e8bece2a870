use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::editor::state::EditorState;
use crate::foundation::core::{Fps, GridSize, Palette};
use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::frame::model::Frame;
use crate::frame::sequence::Animation;

/// JSON interchange document for a whole animation.
///
/// ```json
/// { "rows": 9, "cols": 9, "fps": 12, "loop": true,
///   "palette": { "on": "#0af", "off": "#222" },
///   "frames": [[[0, 1, ...], ...], ...] }
/// ```
///
/// Every field except `frames` has a default. Always [`Project::validate`] before use;
/// [`Project::from_reader`] and [`Project::from_path`] do so.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Grid rows.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Grid columns.
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Playback rate.
    #[serde(default)]
    pub fps: Fps,
    /// Wrap around after the last frame.
    #[serde(default = "default_loop", rename = "loop")]
    pub looping: bool,
    /// Display colours.
    #[serde(default)]
    pub palette: Palette,
    /// Frames in playback order.
    pub frames: Vec<Frame>,
}

fn default_rows() -> usize {
    GridSize::default().rows
}

fn default_cols() -> usize {
    GridSize::default().cols
}

fn default_loop() -> bool {
    true
}

impl Project {
    /// A project holding one empty `rows x cols` frame.
    pub fn new(rows: usize, cols: usize) -> GlowgridResult<Self> {
        let size = GridSize::checked(rows, cols)?;
        Ok(Self::from_animation(&Animation::blank(size)?))
    }

    /// Wrap `animation` with default settings.
    pub fn from_animation(animation: &Animation) -> Self {
        let size = animation.size();
        Self {
            rows: size.rows,
            cols: size.cols,
            fps: Fps::default(),
            looping: true,
            palette: Palette::default(),
            frames: animation.frames().to_vec(),
        }
    }

    /// Snapshot an editing session.
    pub fn from_editor(state: &EditorState) -> Self {
        Self {
            fps: state.fps(),
            looping: state.is_looping(),
            palette: state.palette().clone(),
            ..Self::from_animation(state.animation())
        }
    }

    /// Check structural invariants: a non-empty grid and at least one frame, all of that size.
    pub fn validate(&self) -> GlowgridResult<()> {
        let size = GridSize::checked(self.rows, self.cols)?;
        if self.frames.is_empty() {
            return Err(GlowgridError::validation("project must contain at least one frame"));
        }
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.size() != size {
                return Err(GlowgridError::validation(format!(
                    "frame {i} is {}, project grid is {size}",
                    frame.size()
                )));
            }
        }
        Ok(())
    }

    /// Grid dimensions.
    pub fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }

    /// The frames as a validated [`Animation`].
    pub fn animation(&self) -> GlowgridResult<Animation> {
        self.validate()?;
        Animation::new(self.frames.clone())
    }

    /// Open an editing session on this project.
    pub fn into_editor(self) -> GlowgridResult<EditorState> {
        self.validate()?;
        let mut state = EditorState::with_animation(Animation::new(self.frames)?);
        state.set_fps(f64::from(self.fps.get()));
        if !self.looping {
            state.toggle_loop();
        }
        state.set_palette(self.palette);
        Ok(state)
    }

    /// Parse and validate a project from JSON.
    pub fn from_reader(reader: impl Read) -> GlowgridResult<Self> {
        let project: Self = serde_json::from_reader(reader)
            .map_err(|e| GlowgridError::serde(format!("parse project JSON: {e}")))?;
        project.validate()?;
        Ok(project)
    }

    /// Parse and validate a project JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> GlowgridResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open project '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Write pretty-printed JSON.
    pub fn to_writer(&self, writer: impl Write) -> GlowgridResult<()> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| GlowgridError::serde(format!("write project JSON: {e}")))
    }

    /// Write pretty-printed JSON to `path`, creating or truncating it.
    pub fn save(&self, path: impl AsRef<Path>) -> GlowgridResult<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("create project '{}'", path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("flush project '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/document.rs"]
mod tests;
