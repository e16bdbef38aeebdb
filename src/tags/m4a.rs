use super::select::{PictureKind, select_first};
use super::{AdapterError, CoverAdapter, Outcome};
use crate::format::AudioFormat;
use crate::imaging::CoverTransform;
use mp4ameta::{Img, Tag};
use std::path::Path;

/// `covr` atom rewriting for MPEG-4 audio.
///
/// The atom carries no picture types; every entry counts as a cover and the
/// first one is used. Write-back leaves exactly one JPEG entry.
pub struct M4aAdapter;

impl CoverAdapter for M4aAdapter {
    fn format(&self) -> AudioFormat {
        AudioFormat::M4a
    }

    fn process(
        &self,
        path: &Path,
        transform: &CoverTransform<'_>,
    ) -> Result<Outcome, AdapterError> {
        let mut tag =
            Tag::read_from_path(path).map_err(|e| AdapterError::parse(AudioFormat::M4a, e))?;

        if !replace_artwork(&mut tag, transform)? {
            return Ok(Outcome::NoCover);
        }

        tag.write_to_path(path)
            .map_err(|e| AdapterError::save(AudioFormat::M4a, e))?;
        Ok(Outcome::Modified)
    }
}

/// Resize the first `covr` entry and leave it as the only one.
///
/// Returns `false` when the tag has no artwork.
fn replace_artwork(tag: &mut Tag, transform: &CoverTransform<'_>) -> Result<bool, AdapterError> {
    let covers: Vec<&[u8]> = tag.artworks().map(|img| img.data).collect();
    let Some(index) = select_first(covers.iter().map(|_| PictureKind::FrontCover)) else {
        return Ok(false);
    };

    let jpeg = transform.apply(covers[index])?;
    tracing::debug!(replaced = covers.len(), "setting single covr entry");

    tag.set_artwork(Img::jpeg(jpeg));
    Ok(true)
}
