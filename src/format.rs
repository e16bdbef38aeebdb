//! Extension-based routing of audio files to their tag adapter.
//!
//! Routing is purely lexical: only the final path component's extension is
//! looked at, case-insensitively. The file is never opened here.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Extensions accepted by [`route`], lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["flac", "mp3", "m4a", "ogg", "wav"];

/// Container formats with a cover adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Flac,
    Mp3,
    M4a,
    Ogg,
    Wav,
}

impl AudioFormat {
    /// Look up a format by extension, ignoring case. No leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "flac" => Some(Self::Flac),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "ogg" => Some(Self::Ogg),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
            Self::Wav => "wav",
        }
    }

    /// Display name used in status lines and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
            Self::M4a => "M4A",
            Self::Ogg => "OGG",
            Self::Wav => "WAV",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of routing one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Supported(AudioFormat),
    Unsupported,
}

/// Decide which adapter handles `path`.
pub fn route(path: &Path) -> Route {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(AudioFormat::from_extension)
        .map_or(Route::Unsupported, Route::Supported)
}

/// Shorthand for `route(path) != Route::Unsupported`.
pub fn is_supported(path: &Path) -> bool {
    matches!(route(path), Route::Supported(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_every_supported_extension() {
        for ext in SUPPORTED_EXTENSIONS {
            let path = format!("album/track.{ext}");
            let Route::Supported(format) = route(Path::new(&path)) else {
                panic!("{path} should be supported");
            };
            assert_eq!(format.extension(), *ext);
        }
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(
            route(Path::new("Song.FLAC")),
            Route::Supported(AudioFormat::Flac)
        );
        assert_eq!(
            route(Path::new("Song.Mp3")),
            Route::Supported(AudioFormat::Mp3)
        );
    }

    #[test]
    fn unknown_and_missing_extensions_are_unsupported() {
        assert_eq!(route(Path::new("notes.txt")), Route::Unsupported);
        assert_eq!(route(Path::new("README")), Route::Unsupported);
        assert_eq!(route(Path::new("track.opus")), Route::Unsupported);
    }

    #[test]
    fn only_final_component_counts() {
        assert_eq!(route(Path::new("music.flac/cover.jpg")), Route::Unsupported);
        assert!(is_supported(Path::new("dir.txt/track.ogg")));
    }

    #[test]
    fn names_are_uppercase() {
        assert_eq!(AudioFormat::M4a.to_string(), "M4A");
        assert_eq!(AudioFormat::Wav.name(), "WAV");
    }
}
