use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Product;
use std::ops::{Mul, MulAssign};

use crate::foundation::core::{Vec2, canonical_f64, cmp_fields, mul_vec2};
use crate::foundation::error::TransformResult;
use crate::transform::aspect::AspectRatio;
use crate::transform::field_mode::FieldMode;
use crate::transform::levels::Levels;

/// Number of floats in [`FrameTransform::canonical_fields`].
pub(crate) const CANONICAL_FLOATS: usize = 21;

/// Audio/visual parameters of one layer at one point in time.
///
/// A `FrameTransform` is a plain value: layers compose their transforms
/// root-to-leaf with [`FrameTransform::compose`] (or `*`), animations blend
/// two of them with [`crate::tween`], and renderers compare them frame to frame
/// to detect changes.
///
/// Equality, ordering and hashing are field-wise over a canonical field list
/// (see [`Ord`] impl) where `-0.0 == 0.0` and all NaNs are equal.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameTransform {
    /// Audio gain.
    pub volume: f64,
    /// Opacity factor.
    pub opacity: f64,
    /// Brightness factor.
    pub brightness: f64,
    /// Contrast factor.
    pub contrast: f64,
    /// Saturation factor.
    pub saturation: f64,
    /// Rotation pivot.
    pub anchor: Vec2,
    /// Offset of the fill rectangle.
    pub fill_translation: Vec2,
    /// Size of the fill rectangle. Default (1,1)
    pub fill_scale: Vec2,
    /// Offset of the clip rectangle.
    pub clip_translation: Vec2,
    /// Size of the clip rectangle. Default (1,1)
    pub clip_scale: Vec2,
    /// Rotation in radians.
    pub angle: f64,
    /// Tone-mapping levels.
    pub levels: Levels,
    /// Supported field modes.
    pub field_mode: FieldMode,
    /// Layer is used as a key (matte) for the layer above it.
    pub is_key: bool,
    /// Layer is mixed rather than blended.
    pub is_mix: bool,
}

impl FrameTransform {
    /// The neutral transform: composing with it on either side changes nothing.
    pub const IDENTITY: Self = Self {
        volume: 1.0,
        opacity: 1.0,
        brightness: 1.0,
        contrast: 1.0,
        saturation: 1.0,
        anchor: Vec2::ZERO,
        fill_translation: Vec2::ZERO,
        fill_scale: Vec2::new(1.0, 1.0),
        clip_translation: Vec2::ZERO,
        clip_scale: Vec2::new(1.0, 1.0),
        angle: 0.0,
        levels: Levels::IDENTITY,
        field_mode: FieldMode::PROGRESSIVE,
        is_key: false,
        is_mix: false,
    };

    /// Express `child` inside this transform's coordinate and blend space.
    ///
    /// The child's fill translation is rotated by this transform's angle. Rotation
    /// happens in square-pixel space: y is divided by `aspect` before rotating and
    /// multiplied back afterwards.
    pub fn compose(&self, child: &Self, aspect: AspectRatio) -> Self {
        let aspect = aspect.get();
        let (sin, cos) = self.angle.sin_cos();
        let x = child.fill_translation.x;
        let y = child.fill_translation.y / aspect;
        let rotated = Vec2::new(x * cos - y * sin, (x * sin + y * cos) * aspect);

        Self {
            volume: self.volume * child.volume,
            opacity: self.opacity * child.opacity,
            brightness: self.brightness * child.brightness,
            contrast: self.contrast * child.contrast,
            saturation: self.saturation * child.saturation,
            anchor: self.anchor + mul_vec2(child.anchor, self.fill_scale),
            fill_translation: self.fill_translation + mul_vec2(rotated, self.fill_scale),
            fill_scale: mul_vec2(self.fill_scale, child.fill_scale),
            clip_translation: self.clip_translation
                + mul_vec2(child.clip_translation, self.clip_scale),
            clip_scale: mul_vec2(self.clip_scale, child.clip_scale),
            angle: self.angle + child.angle,
            levels: self.levels.compose(child.levels),
            field_mode: self.field_mode & child.field_mode,
            is_key: self.is_key | child.is_key,
            is_mix: self.is_mix | child.is_mix,
        }
    }

    /// Fold a root-to-leaf layer stack into the leaf's effective transform.
    ///
    /// An empty stack yields [`FrameTransform::IDENTITY`].
    #[tracing::instrument(level = "trace", skip(stack))]
    pub fn compose_all<'a, I>(stack: I, aspect: AspectRatio) -> Self
    where
        I: IntoIterator<Item = &'a FrameTransform>,
    {
        stack
            .into_iter()
            .fold(Self::IDENTITY, |acc, t| acc.compose(t, aspect))
    }

    /// Parse a transform from JSON. Missing fields take their identity defaults.
    pub fn from_json(json: &str) -> TransformResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set `volume`.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Set `opacity`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set `brightness`.
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set `contrast`.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    /// Set `saturation`.
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set `anchor`.
    pub fn with_anchor(mut self, x: f64, y: f64) -> Self {
        self.anchor = Vec2::new(x, y);
        self
    }

    /// Set `fill_translation`.
    pub fn with_fill_translation(mut self, x: f64, y: f64) -> Self {
        self.fill_translation = Vec2::new(x, y);
        self
    }

    /// Set `fill_scale`.
    pub fn with_fill_scale(mut self, x: f64, y: f64) -> Self {
        self.fill_scale = Vec2::new(x, y);
        self
    }

    /// Set `clip_translation`.
    pub fn with_clip_translation(mut self, x: f64, y: f64) -> Self {
        self.clip_translation = Vec2::new(x, y);
        self
    }

    /// Set `clip_scale`.
    pub fn with_clip_scale(mut self, x: f64, y: f64) -> Self {
        self.clip_scale = Vec2::new(x, y);
        self
    }

    /// Set `angle` in radians.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set `levels`.
    pub fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }

    /// Set `field_mode`.
    pub fn with_field_mode(mut self, field_mode: FieldMode) -> Self {
        self.field_mode = field_mode;
        self
    }

    /// Set `is_key`.
    pub fn with_key(mut self, is_key: bool) -> Self {
        self.is_key = is_key;
        self
    }

    /// Set `is_mix`.
    pub fn with_mix(mut self, is_mix: bool) -> Self {
        self.is_mix = is_mix;
        self
    }

    /// Numeric fields in canonical comparison order.
    pub(crate) fn canonical_fields(&self) -> [f64; CANONICAL_FLOATS] {
        let [min_input, max_input, min_output, max_output, gamma] =
            self.levels.canonical_fields();
        [
            self.volume,
            self.opacity,
            self.brightness,
            self.contrast,
            self.saturation,
            self.anchor.x,
            self.anchor.y,
            self.fill_translation.x,
            self.fill_translation.y,
            self.fill_scale.x,
            self.fill_scale.y,
            self.clip_translation.x,
            self.clip_translation.y,
            self.clip_scale.x,
            self.clip_scale.y,
            self.angle,
            min_input,
            max_input,
            min_output,
            max_output,
            gamma,
        ]
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MulAssign<&FrameTransform> for FrameTransform {
    /// Compose in place using the calling thread's aspect ratio.
    fn mul_assign(&mut self, child: &FrameTransform) {
        *self = self.compose(child, AspectRatio::current());
    }
}

impl MulAssign for FrameTransform {
    fn mul_assign(&mut self, child: FrameTransform) {
        *self *= &child;
    }
}

impl Mul<&FrameTransform> for &FrameTransform {
    type Output = FrameTransform;

    /// Compose using the calling thread's aspect ratio.
    fn mul(self, child: &FrameTransform) -> FrameTransform {
        self.compose(child, AspectRatio::current())
    }
}

impl Mul for FrameTransform {
    type Output = FrameTransform;

    fn mul(self, child: FrameTransform) -> FrameTransform {
        &self * &child
    }
}

impl Mul<&FrameTransform> for FrameTransform {
    type Output = FrameTransform;

    fn mul(self, child: &FrameTransform) -> FrameTransform {
        &self * child
    }
}

impl Product for FrameTransform {
    fn product<I: Iterator<Item = FrameTransform>>(iter: I) -> Self {
        let aspect = AspectRatio::current();
        iter.fold(Self::IDENTITY, |acc, t| acc.compose(&t, aspect))
    }
}

impl<'a> Product<&'a FrameTransform> for FrameTransform {
    fn product<I: Iterator<Item = &'a FrameTransform>>(iter: I) -> Self {
        Self::compose_all(iter, AspectRatio::current())
    }
}

impl PartialEq for FrameTransform {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrameTransform {}

impl PartialOrd for FrameTransform {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameTransform {
    /// Lexicographic over: volume, opacity, brightness, contrast, saturation,
    /// anchor, fill_translation, fill_scale, clip_translation, clip_scale, angle,
    /// levels (min_input, max_input, min_output, max_output, gamma), then
    /// field_mode bits, is_key, is_mix. Vectors compare x before y.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_fields(&self.canonical_fields(), &other.canonical_fields())
            .then_with(|| self.field_mode.bits().cmp(&other.field_mode.bits()))
            .then_with(|| self.is_key.cmp(&other.is_key))
            .then_with(|| self.is_mix.cmp(&other.is_mix))
    }
}

impl Hash for FrameTransform {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.canonical_fields() {
            canonical_f64(v).to_bits().hash(state);
        }
        self.field_mode.bits().hash(state);
        self.is_key.hash(state);
        self.is_mix.hash(state);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/frame.rs"]
mod tests;
