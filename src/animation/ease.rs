use std::fmt;
use std::str::FromStr;

use crate::foundation::error::GlowgridError;

/// Named easing curves used to pace tween interpolation.
///
/// Each curve maps normalized time `[0, 1]` onto normalized progress with `f(0) = 0` and
/// `f(1) = 1`. Adding a curve means adding a variant here and a row to [`Easing::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// `t`
    Linear,
    /// `t²`
    EaseIn,
    /// `t·(2−t)`
    EaseOut,
    /// Quadratic in/out, continuous at `t = 0.5`.
    EaseInOut,
    /// `t²·(3−2t)`
    #[default]
    Smoothstep,
}

impl Easing {
    /// Every named curve.
    pub const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Smoothstep,
    ];

    /// Evaluate the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// The curve's stable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
            Self::Smoothstep => "smoothstep",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = GlowgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| {
                GlowgridError::validation(format!(
                    "unknown easing '{s}' (expected one of linear, easeIn, easeOut, easeInOut, smoothstep)"
                ))
            })
    }
}

/// `t`
pub fn linear(t: f64) -> f64 {
    Easing::Linear.apply(t)
}

/// `t²`
pub fn ease_in(t: f64) -> f64 {
    Easing::EaseIn.apply(t)
}

/// `t·(2−t)`
pub fn ease_out(t: f64) -> f64 {
    Easing::EaseOut.apply(t)
}

/// Quadratic ease-in-out.
pub fn ease_in_out(t: f64) -> f64 {
    Easing::EaseInOut.apply(t)
}

/// `t²·(3−2t)`
pub fn smoothstep(t: f64) -> f64 {
    Easing::Smoothstep.apply(t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
