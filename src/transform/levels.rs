use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::foundation::core::{canonical_f64, cmp_fields};

/// Tone-mapping levels applied to a layer.
///
/// Composing levels can only narrow the usable input and output ranges.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Levels {
    /// Lower bound of the input range.
    pub min_input: f64,
    /// Upper bound of the input range.
    pub max_input: f64,
    /// Lower bound of the output range.
    pub min_output: f64,
    /// Upper bound of the output range.
    pub max_output: f64,
    /// Gamma exponent.
    pub gamma: f64,
}

impl Levels {
    /// Identity levels: full input and output range, unit gamma.
    pub const IDENTITY: Self = Self {
        min_input: 0.0,
        max_input: 1.0,
        min_output: 0.0,
        max_output: 1.0,
        gamma: 1.0,
    };

    /// Nest `child` levels inside `self`.
    pub fn compose(self, child: Self) -> Self {
        Self {
            min_input: self.min_input.max(child.min_input),
            max_input: self.max_input.min(child.max_input),
            min_output: self.min_output.max(child.min_output),
            max_output: self.max_output.min(child.max_output),
            gamma: self.gamma * child.gamma,
        }
    }

    pub(crate) fn canonical_fields(self) -> [f64; 5] {
        [
            self.min_input,
            self.max_input,
            self.min_output,
            self.max_output,
            self.gamma,
        ]
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Levels {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Levels {}

impl PartialOrd for Levels {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Levels {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_fields(&self.canonical_fields(), &other.canonical_fields())
    }
}

impl Hash for Levels {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.canonical_fields() {
            canonical_f64(v).to_bits().hash(state);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/levels.rs"]
mod tests;
