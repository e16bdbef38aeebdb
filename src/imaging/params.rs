//! Parameter types for the cover transform.
//!
//! These structs describe *what* the transform should produce, not *how*.
//! They are the interface between [`operations`](super::operations), which
//! knows about configuration, and the [`backend`](super::backend), which does
//! the pixel work. Keeping them separate lets tests swap in a mock backend.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 95). Clamped on construction.
//! - [`CoverParams`] — target square edge and quality for one resize.

/// Edge length, in pixels, of the square every cover is stretched to.
pub const DEFAULT_COVER_SIZE: u32 = 500;

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The encoder takes a `u8`; the clamp in [`Quality::new`] keeps this lossless.
    pub fn as_u8(self) -> u8 {
        self.0.min(100) as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Parameters for one cover resize.
///
/// The output is always `size`×`size`. Aspect ratio is not preserved: a
/// 1200×800 scan is stretched, not cropped or padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverParams {
    pub size: u32,
    pub quality: Quality,
}

impl Default for CoverParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_COVER_SIZE,
            quality: Quality::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_95() {
        assert_eq!(Quality::default().value(), 95);
        assert_eq!(Quality::default().as_u8(), 95);
    }

    #[test]
    fn cover_params_default_is_500_square() {
        let params = CoverParams::default();
        assert_eq!(params.size, 500);
        assert_eq!(params.quality, Quality::new(95));
    }
}
