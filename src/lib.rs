//! Composable, animatable layer transforms for real-time broadcast compositing.
//!
//! A [`FrameTransform`] carries everything a mixer needs to place and blend one
//! layer for one frame: audio gain, color factors, fill and clip rectangles,
//! rotation, tone-mapping [`Levels`], supported [`FieldMode`]s and the key/mix
//! flags.
//!
//! # Per-frame flow
//!
//! 1. **Aspect ratio**: each render thread declares its output geometry with
//!    [`set_current_aspect_ratio`] (or passes an [`AspectRatio`] explicitly).
//! 2. **Compose**: the scene walk multiplies parent × child root-to-leaf
//!    ([`FrameTransform::compose`], `*`, `*=`).
//! 3. **Tween**: animated layers blend keyframes with [`tween`] or a running
//!    [`TweenedTransform`].
//! 4. **Compare**: the renderer checks `previous != current` (or compares
//!    [`TransformFingerprint`]s) to decide whether to re-render.
//!
//! Composition multiplies the continuous factors, narrows levels ranges,
//! intersects field modes and unions the key/mix flags. Tweening interpolates
//! the continuous fields with a caller-supplied curve and combines the rest
//! with the same set algebra.
//!
//! All math is total: degenerate inputs (NaN, infinite scales, zero aspect
//! ratio) propagate as ordinary floating-point values.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod transform;

pub use animation::ease::Ease;
pub use animation::tweened::TweenedTransform;
pub use foundation::core::Vec2;
pub use foundation::error::{TransformError, TransformResult};
pub use transform::aspect::{
    AspectRatio, AspectRatioScope, get_current_aspect_ratio, set_current_aspect_ratio,
};
pub use transform::field_mode::FieldMode;
pub use transform::fingerprint::TransformFingerprint;
pub use transform::frame::FrameTransform;
pub use transform::levels::Levels;
pub use transform::tween::tween;
