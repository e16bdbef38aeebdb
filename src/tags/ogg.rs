//! Ogg Vorbis cover rewriting via `lofty`.
//!
//! Pictures live in the Vorbis comment header as base64
//! `METADATA_BLOCK_PICTURE` fields. The replacement block is a bare front
//! cover: no description and zeroed dimension fields.

use super::select::{PictureKind, select_first};
use super::{AdapterError, CoverAdapter, Outcome};
use crate::format::AudioFormat;
use crate::imaging::CoverTransform;
use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::AudioFile;
use lofty::ogg::{OggPictureStorage, VorbisFile};
use lofty::picture::{MimeType, Picture, PictureInformation, PictureType};
use lofty::tag::TagExt;
use std::fs::File;
use std::path::Path;

pub struct OggAdapter;

fn kind_of(picture: &Picture) -> PictureKind {
    if picture.pic_type() == PictureType::CoverFront {
        PictureKind::FrontCover
    } else {
        PictureKind::Other
    }
}

impl CoverAdapter for OggAdapter {
    fn format(&self) -> AudioFormat {
        AudioFormat::Ogg
    }

    fn process(
        &self,
        path: &Path,
        transform: &CoverTransform<'_>,
    ) -> Result<Outcome, AdapterError> {
        let parse = |e: lofty::error::LoftyError| AdapterError::parse(AudioFormat::Ogg, e);
        let mut file = File::open(path).map_err(|e| AdapterError::parse(AudioFormat::Ogg, e))?;
        let options = ParseOptions::new().read_properties(false);
        let mut vorbis = VorbisFile::read_from(&mut file, options).map_err(parse)?;
        drop(file);

        let comments = vorbis.vorbis_comments_mut();
        let pictures = comments.pictures();
        let Some(index) = select_first(pictures.iter().map(|(p, _)| kind_of(p))) else {
            return Ok(Outcome::NoCover);
        };

        let jpeg = transform.apply(pictures[index].0.data())?;
        if pictures.len() > 1 {
            tracing::warn!(
                path = %path.display(),
                dropped = pictures.len() - 1,
                "discarding additional pictures"
            );
        }

        for i in (0..comments.pictures().len()).rev() {
            comments.remove_picture(i);
        }
        let cover =
            Picture::new_unchecked(PictureType::CoverFront, Some(MimeType::Jpeg), None, jpeg);
        comments
            .insert_picture(cover, Some(PictureInformation::default()))
            .map_err(|e| AdapterError::save(AudioFormat::Ogg, e))?;

        comments
            .save_to_path(path, WriteOptions::default())
            .map_err(|e| AdapterError::save(AudioFormat::Ogg, e))?;
        Ok(Outcome::Modified)
    }
}
