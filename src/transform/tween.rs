use crate::foundation::core::Vec2;
use crate::transform::frame::FrameTransform;
use crate::transform::levels::Levels;

/// Intermediate transform at `time` of an animation from `source` to `dest`.
///
/// `curve(t, value, delta, duration)` is applied to every continuous field
/// independently with `value = source.f` and `delta = dest.f - source.f`.
/// Field modes intersect and the key/mix flags are unioned; neither is
/// interpolated. `time` is not clamped: values outside `[0, duration]` are
/// whatever the curve extrapolates.
///
/// Tweening does not consult the thread's aspect ratio.
pub fn tween<F>(
    time: f64,
    source: &FrameTransform,
    dest: &FrameTransform,
    duration: f64,
    curve: F,
) -> FrameTransform
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    let scalar = |s: f64, d: f64| curve(time, s, d - s, duration);
    let vec2 = |s: Vec2, d: Vec2| Vec2::new(scalar(s.x, d.x), scalar(s.y, d.y));

    FrameTransform {
        volume: scalar(source.volume, dest.volume),
        opacity: scalar(source.opacity, dest.opacity),
        brightness: scalar(source.brightness, dest.brightness),
        contrast: scalar(source.contrast, dest.contrast),
        saturation: scalar(source.saturation, dest.saturation),
        anchor: vec2(source.anchor, dest.anchor),
        fill_translation: vec2(source.fill_translation, dest.fill_translation),
        fill_scale: vec2(source.fill_scale, dest.fill_scale),
        clip_translation: vec2(source.clip_translation, dest.clip_translation),
        clip_scale: vec2(source.clip_scale, dest.clip_scale),
        angle: scalar(source.angle, dest.angle),
        levels: Levels {
            min_input: scalar(source.levels.min_input, dest.levels.min_input),
            max_input: scalar(source.levels.max_input, dest.levels.max_input),
            min_output: scalar(source.levels.min_output, dest.levels.min_output),
            max_output: scalar(source.levels.max_output, dest.levels.max_output),
            gamma: scalar(source.levels.gamma, dest.levels.gamma),
        },
        field_mode: source.field_mode & dest.field_mode,
        is_key: source.is_key | dest.is_key,
        is_mix: source.is_mix | dest.is_mix,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/tween.rs"]
mod tests;
