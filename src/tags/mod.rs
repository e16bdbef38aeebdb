//! Per-format cover adapters.
//!
//! Every supported container gets one [`CoverAdapter`]. They all follow the
//! same steps:
//!
//! 1. Parse the file's metadata. Failure is [`AdapterError::Parse`].
//! 2. Pick the cover with a function from [`select`].
//! 3. Run the [`CoverTransform`] on its bytes. Failure is
//!    [`AdapterError::Transform`] and nothing is written.
//! 4. Apply the format's write-back rule and save. Failure is
//!    [`AdapterError::Save`].
//!
//! No candidate picture means [`Outcome::NoCover`] and the file is never
//! opened for writing.
//!
//! | Format | Crate | Selection | Write-back |
//! |---|---|---|---|
//! | FLAC | `metaflac` | first type-3 picture | replace in place, siblings kept |
//! | MP3 | `id3` | first APIC frame | all APIC frames replaced by one |
//! | WAV | `id3` (RIFF `ID3 ` chunk) | as MP3 | as MP3 |
//! | M4A | `mp4ameta` | first `covr` artwork | single JPEG artwork |
//! | OGG | `lofty` | first picture | single front cover, no description |

mod flac;
mod id3_frames;
mod m4a;
mod mp3;
mod ogg;
pub mod select;
mod wav;

pub use flac::FlacAdapter;
pub use m4a::M4aAdapter;
pub use mp3::Mp3Adapter;
pub use ogg::OggAdapter;
pub use wav::WavAdapter;

use crate::format::AudioFormat;
use crate::imaging::{BackendError, CoverTransform};
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

/// MIME type written with every resized cover.
pub const JPEG_MIME: &str = "image/jpeg";

/// What an adapter did to a file it could read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cover was resized and the file saved.
    Modified,
    /// No candidate picture; the file was left alone.
    NoCover,
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("cannot read {format} metadata: {message}")]
    Parse {
        format: AudioFormat,
        message: String,
    },
    #[error(transparent)]
    Transform(#[from] BackendError),
    #[error("cannot save {format} metadata: {message}")]
    Save {
        format: AudioFormat,
        message: String,
    },
}

impl AdapterError {
    pub(crate) fn parse(format: AudioFormat, err: impl Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn save(format: AudioFormat, err: impl Display) -> Self {
        Self::Save {
            format,
            message: err.to_string(),
        }
    }
}

/// Rewrites the embedded cover of one container format.
pub trait CoverAdapter {
    fn format(&self) -> AudioFormat;

    /// Resize the cover of the file at `path` in place.
    fn process(&self, path: &Path, transform: &CoverTransform<'_>)
    -> Result<Outcome, AdapterError>;
}

static FLAC: FlacAdapter = FlacAdapter;
static MP3: Mp3Adapter = Mp3Adapter;
static M4A: M4aAdapter = M4aAdapter;
static OGG: OggAdapter = OggAdapter;
static WAV: WavAdapter = WavAdapter;

/// The adapter registered for `format`.
pub fn adapter_for(format: AudioFormat) -> &'static dyn CoverAdapter {
    match format {
        AudioFormat::Flac => &FLAC,
        AudioFormat::Mp3 => &MP3,
        AudioFormat::M4a => &M4A,
        AudioFormat::Ogg => &OGG,
        AudioFormat::Wav => &WAV,
    }
}
