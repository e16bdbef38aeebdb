//! Cover image transform — pure Rust, in memory.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Resize → JPEG** | alpha drop + Lanczos3 stretch + `JpegEncoder` |
//!
//! The module is split into:
//! - **Parameters**: [`CoverParams`] and [`Quality`]
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`CoverTransform`], the handle adapters call

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{CoverTransform, get_dimensions};
pub use params::{CoverParams, DEFAULT_COVER_SIZE, Quality};
pub use rust_backend::RustBackend;
