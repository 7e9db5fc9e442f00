use std::cmp::Ordering;

pub use kurbo::Vec2;

/// Map a float onto its canonical representative for comparison and hashing.
///
/// `-0.0` becomes `+0.0` and every NaN becomes the single quiet NaN, so equal
/// values never differ by sign of zero or NaN payload.
#[inline]
pub(crate) fn canonical_f64(v: f64) -> f64 {
    if v.is_nan() {
        f64::NAN
    } else if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Total order over canonicalized floats. NaN sorts after every number.
#[inline]
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    canonical_f64(a).total_cmp(&canonical_f64(b))
}

/// Lexicographic [`cmp_f64`] over two equally long field lists.
pub(crate) fn cmp_fields(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| cmp_f64(*x, *y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[inline]
pub(crate) fn mul_vec2(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
