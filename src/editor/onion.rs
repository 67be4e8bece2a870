use crate::frame::model::Frame;
use crate::frame::sequence::Animation;

/// Which neighbours of the current frame are ghosted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnionSkinMode {
    /// Only the frame before.
    Previous,
    /// Only the frame after.
    Next,
    /// Both neighbours.
    #[default]
    Both,
}

/// Onion-skin settings. Opacities are percentages in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OnionSkin {
    /// Whether ghost layers are produced at all.
    pub enabled: bool,
    /// Opacity of the previous frame.
    pub previous_opacity: f64,
    /// Opacity of the next frame.
    pub next_opacity: f64,
    /// Neighbour selection.
    pub mode: OnionSkinMode,
}

impl Default for OnionSkin {
    fn default() -> Self {
        Self {
            enabled: false,
            previous_opacity: 30.0,
            next_opacity: 15.0,
            mode: OnionSkinMode::Both,
        }
    }
}

/// Which side of the current frame a ghost layer comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnionLayerKind {
    /// The frame before the current one.
    Previous,
    /// The frame after the current one.
    Next,
}

/// A neighbouring frame to draw translucently behind the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnionLayer<'a> {
    /// Frame to ghost.
    pub frame: &'a Frame,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Side of the current frame.
    pub kind: OnionLayerKind,
}

impl OnionSkin {
    /// Set both opacities, clamping each into `[0, 100]`.
    pub fn set_opacity(&mut self, previous: f64, next: f64) {
        self.previous_opacity = clamp_percent(previous);
        self.next_opacity = clamp_percent(next);
    }

    /// Ghost layers around `index`, previous first. Empty when disabled.
    pub fn layers<'a>(&self, animation: &'a Animation, index: usize) -> Vec<OnionLayer<'a>> {
        let mut layers = Vec::with_capacity(2);
        if !self.enabled {
            return layers;
        }
        let show_previous = matches!(self.mode, OnionSkinMode::Previous | OnionSkinMode::Both);
        let show_next = matches!(self.mode, OnionSkinMode::Next | OnionSkinMode::Both);

        if show_previous && let Some(frame) = index.checked_sub(1).and_then(|i| animation.get(i)) {
            layers.push(OnionLayer {
                frame,
                opacity: self.previous_opacity / 100.0,
                kind: OnionLayerKind::Previous,
            });
        }
        if show_next && let Some(frame) = animation.get(index + 1) {
            layers.push(OnionLayer {
                frame,
                opacity: self.next_opacity / 100.0,
                kind: OnionLayerKind::Next,
            });
        }
        layers
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}
