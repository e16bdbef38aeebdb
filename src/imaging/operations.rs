//! High-level cover operations.
//!
//! These functions combine configuration with backend execution. The tag
//! adapters never call a backend directly; they go through [`CoverTransform`]
//! so every adapter applies the same size and quality.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{CoverParams, Quality};
use crate::config::CoverConfig;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get picture dimensions using the backend.
pub fn get_dimensions(backend: &dyn ImageBackend, data: &[u8]) -> Result<(u32, u32)> {
    let Dimensions { width, height } = backend.identify(data)?;
    Ok((width, height))
}

/// A backend bound to the parameters of one run.
///
/// Cheap to copy around; adapters receive it by reference.
#[derive(Clone, Copy)]
pub struct CoverTransform<'a> {
    backend: &'a dyn ImageBackend,
    params: CoverParams,
}

impl<'a> CoverTransform<'a> {
    pub fn new(backend: &'a dyn ImageBackend, params: CoverParams) -> Self {
        Self { backend, params }
    }

    /// Build from the `[cover]` config section.
    pub fn from_config(backend: &'a dyn ImageBackend, config: &CoverConfig) -> Self {
        Self::new(
            backend,
            CoverParams {
                size: config.size,
                quality: Quality::new(config.quality),
            },
        )
    }

    pub fn params(&self) -> CoverParams {
        self.params
    }

    /// Resize one embedded picture.
    ///
    /// Returns the new JPEG bytes, or the backend's error. Nothing is logged
    /// at error level here; the batch boundary decides how failures surface.
    pub fn apply(&self, data: &[u8]) -> Result<Vec<u8>> {
        match get_dimensions(self.backend, data) {
            Ok((width, height)) => tracing::debug!(width, height, "source cover"),
            Err(err) => tracing::debug!(error = %err, "source cover not identified"),
        }
        tracing::debug!(
            input_bytes = data.len(),
            size = self.params.size,
            quality = self.params.quality.value(),
            "resizing cover"
        );
        let out = self.backend.resize_cover(data, &self.params)?;
        tracing::debug!(output_bytes = out.len(), "cover re-encoded");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MOCK_JPEG, MockBackend, RecordedOp};

    #[test]
    fn apply_passes_params_to_backend() {
        let backend = MockBackend::new();
        let transform = CoverTransform::new(
            &backend,
            CoverParams {
                size: 320,
                quality: Quality::new(70),
            },
        );

        let out = transform.apply(b"original").unwrap();

        assert_eq!(out, MOCK_JPEG);
        assert_eq!(
            backend.get_operations(),
            vec![
                RecordedOp::Identify { input_len: 8 },
                RecordedOp::ResizeCover {
                    input: b"original".to_vec(),
                    size: 320,
                    quality: 70,
                },
            ]
        );
    }

    #[test]
    fn apply_surfaces_backend_failure() {
        let backend = MockBackend::failing();
        let transform = CoverTransform::new(&backend, CoverParams::default());

        assert!(matches!(
            transform.apply(b"broken"),
            Err(BackendError::Decode(_))
        ));
        assert_eq!(backend.resize_count(), 1);
    }

    #[test]
    fn from_config_clamps_quality() {
        let backend = MockBackend::new();
        let config = CoverConfig {
            size: 500,
            quality: 250,
        };
        let transform = CoverTransform::from_config(&backend, &config);
        assert_eq!(transform.params().quality.value(), 100);
        assert_eq!(transform.params().size, 500);
    }

    #[test]
    fn get_dimensions_returns_tuple() {
        let backend = MockBackend::new();
        assert_eq!(get_dimensions(&backend, b"x").unwrap(), (500, 500));
    }
}
