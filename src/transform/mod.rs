pub(crate) mod aspect;
pub(crate) mod field_mode;
pub(crate) mod fingerprint;
pub(crate) mod frame;
pub(crate) mod levels;
pub(crate) mod tween;
