use super::{AdapterError, CoverAdapter, Outcome, id3_frames};
use crate::format::AudioFormat;
use crate::imaging::CoverTransform;
use id3::{Tag, Version};
use std::path::Path;

/// ID3v2 cover rewriting for MP3 files.
pub struct Mp3Adapter;

impl CoverAdapter for Mp3Adapter {
    fn format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }

    fn process(
        &self,
        path: &Path,
        transform: &CoverTransform<'_>,
    ) -> Result<Outcome, AdapterError> {
        let mut tag = id3_frames::or_empty(Tag::read_from_path(path))
            .map_err(|e| AdapterError::parse(AudioFormat::Mp3, e))?;

        if !id3_frames::replace_cover(&mut tag, transform)? {
            return Ok(Outcome::NoCover);
        }

        tag.write_to_path(path, Version::Id3v24)
            .map_err(|e| AdapterError::save(AudioFormat::Mp3, e))?;
        tracing::debug!(path = %path.display(), "wrote ID3v2.4 tag");
        Ok(Outcome::Modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use crate::imaging::{CoverParams, RustBackend};
    use crate::tags::test_fixtures::{fake_mp3_audio, png_cover};
    use id3::TagLike;
    use id3::frame::{Picture, PictureType};
    use std::fs;
    use tempfile::TempDir;

    fn apic(kind: PictureType, data: Vec<u8>) -> Picture {
        Picture {
            mime_type: "image/png".to_string(),
            picture_type: kind,
            description: String::new(),
            data,
        }
    }

    fn write_mp3(dir: &TempDir, pictures: Vec<Picture>) -> std::path::PathBuf {
        let path = dir.path().join("track.mp3");
        fs::write(&path, fake_mp3_audio()).unwrap();
        let mut tag = Tag::new();
        tag.set_title("Track");
        for p in pictures {
            tag.add_frame(p);
        }
        tag.write_to_path(&path, Version::Id3v24).unwrap();
        path
    }

    #[test]
    fn two_apic_frames_collapse_to_one_resized_cover() {
        let tmp = TempDir::new().unwrap();
        let path = write_mp3(
            &tmp,
            vec![
                apic(PictureType::CoverFront, png_cover(80, 40, 10)),
                apic(PictureType::CoverBack, png_cover(30, 30, 99)),
            ],
        );

        let backend = RustBackend::new();
        let transform = CoverTransform::new(&backend, CoverParams::default());
        let outcome = Mp3Adapter.process(&path, &transform).unwrap();
        assert_eq!(outcome, Outcome::Modified);

        let tag = Tag::read_from_path(&path).unwrap();
        let pictures: Vec<&Picture> = tag.pictures().collect();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].mime_type, "image/jpeg");
        assert_eq!(pictures[0].description, "Cover");
        let img = image::load_from_memory(&pictures[0].data).unwrap();
        assert_eq!((img.width(), img.height()), (500, 500));
        assert_eq!(tag.title(), Some("Track"));
    }

    #[test]
    fn decode_failure_leaves_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = write_mp3(
            &tmp,
            vec![apic(PictureType::CoverFront, b"definitely not an image".to_vec())],
        );
        let before = fs::read(&path).unwrap();

        let backend = MockBackend::failing();
        let transform = CoverTransform::new(&backend, CoverParams::default());
        let result = Mp3Adapter.process(&path, &transform);

        assert!(matches!(result, Err(AdapterError::Transform(_))));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn untagged_mp3_has_no_cover() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bare.mp3");
        fs::write(&path, fake_mp3_audio()).unwrap();

        let backend = MockBackend::new();
        let transform = CoverTransform::new(&backend, CoverParams::default());
        assert_eq!(
            Mp3Adapter.process(&path, &transform).unwrap(),
            Outcome::NoCover
        );
        assert_eq!(fs::read(&path).unwrap(), fake_mp3_audio());
    }

    #[test]
    fn tag_without_pictures_has_no_cover() {
        let tmp = TempDir::new().unwrap();
        let path = write_mp3(&tmp, Vec::new());

        let backend = MockBackend::new();
        let transform = CoverTransform::new(&backend, CoverParams::default());
        assert_eq!(
            Mp3Adapter.process(&path, &transform).unwrap(),
            Outcome::NoCover
        );
    }
}
