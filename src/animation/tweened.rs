use crate::animation::ease::Ease;
use crate::transform::frame::FrameTransform;
use crate::transform::tween::tween;

/// A running animation from one transform to another, measured in frames.
///
/// The scheduler advances it once per rendered frame with
/// [`TweenedTransform::fetch_and_tick`]; once `time` reaches `duration` it
/// keeps returning `dest` exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TweenedTransform {
    source: FrameTransform,
    dest: FrameTransform,
    duration: u32,
    time: u32,
    ease: Ease,
}

impl TweenedTransform {
    /// Start an animation from `source` to `dest` lasting `duration` frames.
    pub fn new(source: FrameTransform, dest: FrameTransform, duration: u32, ease: Ease) -> Self {
        Self {
            source,
            dest,
            duration,
            time: 0,
            ease,
        }
    }

    /// A finished animation resting at `value`.
    pub fn at_rest(value: FrameTransform) -> Self {
        Self::new(value, value, 0, Ease::Linear)
    }

    /// Transform at the current time.
    pub fn fetch(&self) -> FrameTransform {
        if self.is_finished() {
            return self.dest;
        }
        tween(
            f64::from(self.time),
            &self.source,
            &self.dest,
            f64::from(self.duration),
            self.ease.curve(),
        )
    }

    /// Advance by `frames` (stopping at the end) and return the new transform.
    pub fn fetch_and_tick(&mut self, frames: u32) -> FrameTransform {
        self.time = self.time.saturating_add(frames).min(self.duration);
        self.fetch()
    }

    /// Start a new animation towards `dest` from wherever this one currently is.
    #[tracing::instrument(level = "debug", skip(self, dest))]
    pub fn retarget(&mut self, dest: FrameTransform, duration: u32, ease: Ease) {
        let source = self.fetch();
        *self = Self::new(source, dest, duration, ease);
    }

    /// Whether the animation has reached `dest`.
    pub fn is_finished(&self) -> bool {
        self.time >= self.duration
    }

    /// Starting transform.
    pub fn source(&self) -> &FrameTransform {
        &self.source
    }

    /// Target transform.
    pub fn dest(&self) -> &FrameTransform {
        &self.dest
    }

    /// Frames elapsed.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Total length in frames.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Easing curve.
    pub fn ease(&self) -> Ease {
        self.ease
    }
}

impl Default for TweenedTransform {
    fn default() -> Self {
        Self::at_rest(FrameTransform::IDENTITY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tweened.rs"]
mod tests;
