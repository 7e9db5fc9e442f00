//! Display aspect-ratio used to correct rotation for non-square pixels.
//!
//! [`FrameTransform::compose`](crate::FrameTransform::compose) takes the ratio
//! explicitly. The `*` and `*=` operators cannot, so they read a per-thread
//! context instead: each render thread (typically one per output channel) sets
//! its own ratio and never observes another thread's value.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static CURRENT_ASPECT_RATIO: Cell<f64> = const { Cell::new(1.0) };
}

/// Output aspect ratio (square-pixel width over height) used to correct the y
/// axis while rotating fill translations.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AspectRatio(pub f64);

impl AspectRatio {
    /// Square pixels.
    pub const SQUARE: Self = Self(1.0);

    /// Wrap a raw ratio. Degenerate values (zero, NaN) are accepted and propagate
    /// through composition as ordinary floating-point results.
    pub fn new(ratio: f64) -> Self {
        Self(ratio)
    }

    /// Ratio for an output whose square-pixel geometry is `square_width` x `square_height`.
    pub fn from_dimensions(square_width: f64, square_height: f64) -> Self {
        Self(square_width / square_height)
    }

    /// The calling thread's current ratio.
    pub fn current() -> Self {
        Self(get_current_aspect_ratio())
    }

    /// Raw ratio value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl From<f64> for AspectRatio {
    fn from(ratio: f64) -> Self {
        Self(ratio)
    }
}

/// Set the calling thread's aspect ratio.
pub fn set_current_aspect_ratio(aspect_ratio: f64) {
    tracing::trace!(aspect_ratio, "set current aspect ratio");
    CURRENT_ASPECT_RATIO.with(|cell| cell.set(aspect_ratio));
}

/// Read the calling thread's aspect ratio (1.0 until set).
pub fn get_current_aspect_ratio() -> f64 {
    CURRENT_ASPECT_RATIO.with(Cell::get)
}

/// Overrides the calling thread's aspect ratio until dropped, then restores
/// the previous value.
///
/// The guard is `!Send`: it must be dropped on the thread that created it.
#[must_use = "the previous aspect ratio is restored as soon as the scope is dropped"]
#[derive(Debug)]
pub struct AspectRatioScope {
    previous: f64,
    _not_send: PhantomData<*const ()>,
}

impl AspectRatioScope {
    /// Set the thread's ratio to `aspect_ratio` for the lifetime of the guard.
    pub fn enter(aspect_ratio: impl Into<AspectRatio>) -> Self {
        let previous = get_current_aspect_ratio();
        set_current_aspect_ratio(aspect_ratio.into().get());
        Self {
            previous,
            _not_send: PhantomData,
        }
    }

    /// The ratio that will be restored on drop.
    pub fn previous(&self) -> f64 {
        self.previous
    }
}

impl Drop for AspectRatioScope {
    fn drop(&mut self) {
        set_current_aspect_ratio(self.previous);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/aspect.rs"]
mod tests;
