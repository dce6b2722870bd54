//! Tolerance constants for audio testing.

/// Floating point rounding errors (for exact gain).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// 16-bit quantization step size.
/// Use when a signal passes through a 16-bit WAV file.
pub const INT16_EPSILON: f32 = 1.0 / 32768.0;
