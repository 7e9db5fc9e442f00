use crate::foundation::error::{TransformError, TransformResult};

bitflags::bitflags! {
    /// Video field-rendering modes a layer supports.
    ///
    /// Composition and tweening intersect field modes, so a mode that a nested
    /// layer does not support never leaks up the stack.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
    )]
    pub struct FieldMode: u8 {
        /// Lower (even) field.
        const LOWER = 0b01;
        /// Upper (odd) field.
        const UPPER = 0b10;
        /// Full progressive frame: both fields.
        const PROGRESSIVE = Self::LOWER.bits() | Self::UPPER.bits();
    }
}

impl Default for FieldMode {
    fn default() -> Self {
        Self::PROGRESSIVE
    }
}

impl FieldMode {
    /// No field mode at all.
    pub const EMPTY: Self = Self::empty();

    /// Parse a field-mode name (`empty`, `lower`, `upper`, `progressive`), ignoring case.
    pub fn parse(name: &str) -> TransformResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::EMPTY),
            "lower" => Ok(Self::LOWER),
            "upper" => Ok(Self::UPPER),
            "progressive" => Ok(Self::PROGRESSIVE),
            other => Err(TransformError::validation(format!(
                "unknown field mode '{other}'"
            ))),
        }
    }

    /// Canonical lowercase name of this mode.
    pub fn label(self) -> &'static str {
        if self == Self::PROGRESSIVE {
            "progressive"
        } else if self == Self::UPPER {
            "upper"
        } else if self == Self::LOWER {
            "lower"
        } else {
            "empty"
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/field_mode.rs"]
mod tests;
