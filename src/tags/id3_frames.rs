//! APIC handling shared by the MP3 and WAV adapters.

use super::select::{PictureKind, select_first};
use super::{AdapterError, JPEG_MIME};
use crate::imaging::CoverTransform;
use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike};

/// Description written on the replacement APIC frame.
pub const COVER_DESCRIPTION: &str = "Cover";

/// Treat "no ID3 tag in this file" as an empty tag.
pub fn or_empty(result: Result<Tag, id3::Error>) -> Result<Tag, id3::Error> {
    match result {
        Err(err) if matches!(err.kind, ErrorKind::NoTag) => Ok(Tag::new()),
        other => other,
    }
}

fn kind_of(picture: &Picture) -> PictureKind {
    if picture.picture_type == PictureType::CoverFront {
        PictureKind::FrontCover
    } else {
        PictureKind::Other
    }
}

/// Resize the first APIC frame and make it the tag's only picture.
///
/// Returns `Ok(false)` without touching the tag when there is no picture.
/// On a transform error the tag is also left unmodified.
pub fn replace_cover(tag: &mut Tag, transform: &CoverTransform<'_>) -> Result<bool, AdapterError> {
    let pictures: Vec<&Picture> = tag.pictures().collect();
    let Some(index) = select_first(pictures.iter().map(|p| kind_of(p))) else {
        return Ok(false);
    };
    if pictures.len() > 1 {
        tracing::warn!(
            dropped = pictures.len() - 1,
            "discarding additional APIC frames"
        );
    }

    let jpeg = transform.apply(&pictures[index].data)?;

    tag.remove_all_pictures();
    tag.add_frame(Picture {
        mime_type: JPEG_MIME.to_string(),
        picture_type: PictureType::CoverFront,
        description: COVER_DESCRIPTION.to_string(),
        data: jpeg,
    });
    Ok(true)
}
