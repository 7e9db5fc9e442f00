use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::canonical_f64;
use crate::transform::frame::FrameTransform;

const XXH3_SEED: u64 = 0x6c8e_9cf5_7032_4a1b;

/// Stable 128-bit digest of a [`FrameTransform`].
///
/// Equal transforms (in the sense of `==`) always share a fingerprint, so a
/// renderer can cache the last fingerprint per layer and skip re-rendering when
/// it is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransformFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(canonical_f64(v).to_bits());
    }

    fn finish(self) -> TransformFingerprint {
        let v = self.inner.digest128();
        TransformFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl FrameTransform {
    /// Stable fingerprint over the canonical field list.
    pub fn fingerprint(&self) -> TransformFingerprint {
        let mut h = StableHasher::new();
        for v in self.canonical_fields() {
            h.write_f64(v);
        }
        h.write_u8(self.field_mode.bits());
        h.write_bool(self.is_key);
        h.write_bool(self.is_mix);
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/fingerprint.rs"]
mod tests;
