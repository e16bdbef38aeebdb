use super::{AdapterError, CoverAdapter, Outcome, id3_frames};
use crate::format::AudioFormat;
use crate::imaging::CoverTransform;
use id3::{Tag, Version};
use std::path::Path;

/// Cover rewriting for the ID3v2 chunk of a RIFF/WAVE file.
///
/// A WAV without an `ID3 ` chunk is read as an empty tag, so it reports
/// no cover instead of failing.
pub struct WavAdapter;

impl CoverAdapter for WavAdapter {
    fn format(&self) -> AudioFormat {
        AudioFormat::Wav
    }

    fn process(
        &self,
        path: &Path,
        transform: &CoverTransform<'_>,
    ) -> Result<Outcome, AdapterError> {
        let mut tag = id3_frames::or_empty(Tag::read_from_path(path))
            .map_err(|e| AdapterError::parse(AudioFormat::Wav, e))?;

        if !id3_frames::replace_cover(&mut tag, transform)? {
            return Ok(Outcome::NoCover);
        }

        tag.write_to_path(path, Version::Id3v24)
            .map_err(|e| AdapterError::save(AudioFormat::Wav, e))?;
        Ok(Outcome::Modified)
    }
}
