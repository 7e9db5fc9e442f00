use std::f64::consts::PI;
use std::str::FromStr;

use crate::foundation::error::{TransformError, TransformResult};

/// Easing functions used to map normalized animation progress.
///
/// Every variant maps 0 to 0 and 1 to 1 exactly, so tweens driven by an
/// `Ease` land precisely on their endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
}

impl Ease {
    /// All easing variants.
    pub const ALL: [Ease; 13] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
    ];

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => 2f64.powf(10.0 * t - 10.0),
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::InOutExpo => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }

    /// Tween curve: `value + delta * apply(t / duration)`.
    ///
    /// A non-positive `duration` is an animation that has already completed and
    /// yields `value + delta`.
    pub fn tween(self, t: f64, value: f64, delta: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return value + delta;
        }
        value + delta * self.apply(t / duration)
    }

    /// This ease as a curve callable for [`crate::tween`].
    pub fn curve(self) -> impl Fn(f64, f64, f64, f64) -> f64 + Copy {
        move |t, value, delta, duration| self.tween(t, value, delta, duration)
    }

    /// Parse an ease name, ignoring case, `_`, `-` and an optional `ease` prefix.
    ///
    /// Both `"InOutQuad"` and `"easeinoutquad"` name [`Ease::InOutQuad`];
    /// `"easenone"` is accepted for [`Ease::Linear`].
    pub fn from_name(name: &str) -> TransformResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let key = normalized.strip_prefix("ease").unwrap_or(&normalized);
        let ease = match key {
            "linear" | "none" => Self::Linear,
            "inquad" => Self::InQuad,
            "outquad" => Self::OutQuad,
            "inoutquad" => Self::InOutQuad,
            "incubic" => Self::InCubic,
            "outcubic" => Self::OutCubic,
            "inoutcubic" => Self::InOutCubic,
            "insine" => Self::InSine,
            "outsine" => Self::OutSine,
            "inoutsine" => Self::InOutSine,
            "inexpo" => Self::InExpo,
            "outexpo" => Self::OutExpo,
            "inoutexpo" => Self::InOutExpo,
            _ => {
                return Err(TransformError::validation(format!(
                    "unknown ease '{name}'"
                )));
            }
        };
        Ok(ease)
    }
}

impl FromStr for Ease {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
