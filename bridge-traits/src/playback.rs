//! Borrowed views over a [`TrackDescriptor`](crate::track::TrackDescriptor)
//! that playback adapters switch on.
//!
//! Host audio engines open content either by location or by decoding a
//! resident buffer. [`AudioSource`] captures that choice once so adapters do
//! not re-derive it from raw fields. [`ArtworkSource`] does the same for the
//! three cover-art fields.

use bytes::Bytes;

/// The active audio source of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSource<'a> {
    /// URI or filesystem path the host opens itself.
    Path(&'a str),
    /// In-memory audio payload owned by the descriptor.
    Buffer(&'a Bytes),
}

impl<'a> AudioSource<'a> {
    /// Returns `true` for `http://` or `https://` locations.
    pub fn is_remote(&self) -> bool {
        match self {
            AudioSource::Path(path) => {
                let lower = path.trim_start().to_ascii_lowercase();
                lower.starts_with("http://") || lower.starts_with("https://")
            }
            AudioSource::Buffer(_) => false,
        }
    }

    /// Location string, when the track is opened by location.
    pub fn as_path(&self) -> Option<&'a str> {
        match self {
            AudioSource::Path(path) => Some(*path),
            AudioSource::Buffer(_) => None,
        }
    }

    /// Resident bytes, when the track is decoded from memory.
    pub fn as_buffer(&self) -> Option<&'a Bytes> {
        match self {
            AudioSource::Path(_) => None,
            AudioSource::Buffer(data) => Some(*data),
        }
    }
}

/// One of the cover-art references a track may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkSource<'a> {
    /// Remote image URI.
    Url(&'a str),
    /// Identifier of an image bundled with the host app.
    Asset(&'a str),
    /// Local image path.
    File(&'a str),
}

impl<'a> ArtworkSource<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            ArtworkSource::Url(value)
            | ArtworkSource::Asset(value)
            | ArtworkSource::File(value) => *value,
        }
    }
}
