//! FLAC cover rewriting via `metaflac`.
//!
//! FLAC is the one format that keeps sibling pictures: only the first
//! PICTURE block of type 3 is replaced, and back covers, artist photos and
//! the rest are written back byte for byte in their original order.

use super::select::{PictureKind, select_front_cover};
use super::{AdapterError, CoverAdapter, JPEG_MIME, Outcome};
use crate::format::AudioFormat;
use crate::imaging::CoverTransform;
use metaflac::block::{Picture, PictureType};
use metaflac::{Block, BlockType, Tag};
use std::path::Path;

/// Bits per pixel of the baseline RGB JPEG the transform writes.
const JPEG_COLOR_DEPTH: u32 = 24;

pub struct FlacAdapter;

fn kind_of(picture: &Picture) -> PictureKind {
    if picture.picture_type == PictureType::CoverFront {
        PictureKind::FrontCover
    } else {
        PictureKind::Other
    }
}

impl CoverAdapter for FlacAdapter {
    fn format(&self) -> AudioFormat {
        AudioFormat::Flac
    }

    fn process(
        &self,
        path: &Path,
        transform: &CoverTransform<'_>,
    ) -> Result<Outcome, AdapterError> {
        let mut tag =
            Tag::read_from_path(path).map_err(|e| AdapterError::parse(AudioFormat::Flac, e))?;

        let mut blocks: Vec<Block> = tag.blocks().cloned().collect();
        let kinds = blocks.iter().filter_map(|block| match block {
            Block::Picture(picture) => Some(kind_of(picture)),
            _ => None,
        });
        let Some(index) = select_front_cover(kinds) else {
            tracing::debug!(path = %path.display(), "no front cover block");
            return Ok(Outcome::NoCover);
        };

        let cover = blocks
            .iter_mut()
            .filter_map(|block| match block {
                Block::Picture(picture) => Some(picture),
                _ => None,
            })
            .nth(index);
        let Some(cover) = cover else {
            return Ok(Outcome::NoCover);
        };

        cover.data = transform.apply(&cover.data)?;
        let size = transform.params().size;
        cover.mime_type = JPEG_MIME.to_string();
        cover.width = size;
        cover.height = size;
        cover.depth = JPEG_COLOR_DEPTH;
        cover.num_colors = 0;

        replace_blocks(&mut tag, blocks);
        tag.save()
            .map_err(|e| AdapterError::save(AudioFormat::Flac, e))?;
        Ok(Outcome::Modified)
    }
}

/// Swap the tag's metadata blocks for `blocks`, keeping their order.
fn replace_blocks(tag: &mut Tag, blocks: Vec<Block>) {
    let mut types: Vec<BlockType> = Vec::new();
    for block in &blocks {
        let block_type = block.block_type();
        if !types.contains(&block_type) {
            types.push(block_type);
        }
    }
    for block_type in types {
        tag.remove_blocks(block_type);
    }
    for block in blocks {
        tag.push_block(block);
    }
}
