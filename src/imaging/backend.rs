//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the tag adapters
//! need: identify a picture's dimensions and run the cover transform.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Both operations work on in-memory buffers; no backend touches disk.

use super::params::CoverParams;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("cannot decode picture: {0}")]
    Decode(String),
    #[error("cannot encode JPEG: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image backends.
///
/// `resize_cover` must either return a complete JPEG buffer of exactly
/// `params.size`×`params.size` pixels or an error. An empty buffer is never a
/// valid success value.
pub trait ImageBackend {
    /// Decode just enough of `data` to report its pixel dimensions.
    fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError>;

    /// Decode, flatten alpha, stretch to a square, and re-encode as JPEG.
    fn resize_cover(&self, data: &[u8], params: &CoverParams) -> Result<Vec<u8>, BackendError>;
}
