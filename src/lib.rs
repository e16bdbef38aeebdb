//! # Cover Resize
//!
//! Batch tool that shrinks the cover art embedded in audio files. Every front
//! cover it finds is decoded, stretched to a 500×500 square, re-encoded as a
//! quality-95 JPEG, and written back into the file's own tag.
//!
//! # Architecture: Scan, Then Process
//!
//! ```text
//! 1. Scan      paths  →  ScanResult      (files/dirs → deduplicated audio file set)
//! 2. Process   files  →  BatchSummary    (per-file adapter run → one status each)
//! ```
//!
//! Each file is handled start to finish before the next one begins. A file
//! either ends up with a fully replaced cover and a saved tag, or it is not
//! written at all.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Expands input paths into the set of supported audio files |
//! | [`format`] | Extension → [`format::AudioFormat`] routing |
//! | [`tags`] | One cover adapter per container format (FLAC, MP3, M4A, OGG, WAV) |
//! | [`imaging`] | The cover transform: decode, drop alpha, Lanczos3 resize, JPEG encode |
//! | [`process`] | Sequential batch runner producing per-file statuses and totals |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI status lines and scan listings |
//!
//! # Design Decisions
//!
//! ## One Tag Crate per Container
//!
//! FLAC goes through `metaflac`, MP3 and WAV through `id3`, M4A through
//! `mp4ameta`, and Ogg Vorbis through `lofty`. Each crate exposes its
//! container's native picture model, which matters for the write-back rules:
//! FLAC must keep sibling PICTURE blocks untouched, while ID3 needs every APIC
//! frame replaced by a single new one. A format-agnostic tag layer would
//! normalize those differences away.
//!
//! ## Stretch, Don't Crop
//!
//! Covers are resized to exactly the configured square with no aspect ratio
//! preservation. Players that expect square art display the result without
//! letterboxing, and the output size is predictable for every input.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses only the `image` crate. No ImageMagick, no
//! system libraries: the binary is self-contained.
//!
//! ## Failures Stay Per File
//!
//! A corrupt picture, an unreadable tag, or a failed save marks that one file
//! as failed and the batch moves on. Unreadable subfolders are skipped with a
//! warning. Only bad configuration or an input directory that cannot be read
//! at all stops a run.

pub mod config;
pub mod format;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
pub mod tags;
