//! # Track Descriptor
//!
//! Canonical description of one playable track as it crosses from the host
//! application into the platform audio subsystem.
//!
//! ## Construction
//!
//! A descriptor is built once from exactly one input:
//!
//! - JSON text from the host channel ([`TrackDescriptor::from_json`])
//! - an already-decoded key/value mapping ([`TrackDescriptor::from_dictionary`])
//! - an in-memory audio payload ([`TrackDescriptor::from_buffer`] or
//!   [`TrackDescriptor::builder`])
//!
//! Parsing is permissive. Unknown keys are ignored and a recognized key whose
//! value is not a string is treated as absent. The only failure is text that
//! is not a JSON object.
//!
//! ```
//! use bridge_traits::TrackDescriptor;
//!
//! let track = TrackDescriptor::from_json(r#"{"title":"Song A","path":"/music/a.mp3"}"#)?;
//! assert_eq!(track.title(), Some("Song A"));
//! assert!(track.is_using_path());
//! # Ok::<(), bridge_traits::BridgeError>(())
//! ```

use crate::error::{BridgeError, Result};
use crate::playback::{ArtworkSource, AudioSource};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::debug;

pub const KEY_PATH: &str = "path";
pub const KEY_TITLE: &str = "title";
pub const KEY_ARTIST: &str = "artist";
pub const KEY_ALBUM_ART_URL: &str = "albumArtUrl";
pub const KEY_ALBUM_ART_ASSET: &str = "albumArtAsset";
pub const KEY_ALBUM_ART_FILE: &str = "albumArtFile";

/// Keys understood by the JSON and mapping constructors.
pub const RECOGNIZED_KEYS: [&str; 6] = [
    KEY_PATH,
    KEY_TITLE,
    KEY_ARTIST,
    KEY_ALBUM_ART_URL,
    KEY_ALBUM_ART_ASSET,
    KEY_ALBUM_ART_FILE,
];

/// Metadata and audio source of a single track.
///
/// Fields are fixed at construction and only readable afterwards. Absent
/// fields stay `None`, so an explicitly empty string is distinguishable from
/// an unset one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct TrackDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album_art_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album_art_asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album_art_file: Option<String>,
    #[serde(skip)]
    data_buffer: Option<Bytes>,
}

impl TrackDescriptor {
    /// Parse a descriptor from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MalformedInput`] when the text is not valid JSON
    /// or does not hold a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            debug!(error = %e, "Rejected malformed track JSON");
            BridgeError::from(e)
        })?;

        let descriptor = Self::try_from(value)?;
        debug!(
            using_path = descriptor.is_using_path(),
            "Parsed track descriptor from JSON"
        );
        Ok(descriptor)
    }

    /// Build a descriptor from a decoded key/value mapping.
    ///
    /// Never fails and never assigns the data buffer.
    pub fn from_dictionary(map: &Map<String, Value>) -> Self {
        Self {
            path: string_field(map, KEY_PATH),
            title: string_field(map, KEY_TITLE),
            artist: string_field(map, KEY_ARTIST),
            album_art_url: string_field(map, KEY_ALBUM_ART_URL),
            album_art_asset: string_field(map, KEY_ALBUM_ART_ASSET),
            album_art_file: string_field(map, KEY_ALBUM_ART_FILE),
            data_buffer: None,
        }
    }

    /// Descriptor for audio already resident in memory. `path` stays absent.
    pub fn from_buffer(data: impl Into<Bytes>) -> Self {
        Self::builder().data_buffer(data).build()
    }

    pub fn builder() -> TrackDescriptorBuilder {
        TrackDescriptorBuilder::default()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album_art_url(&self) -> Option<&str> {
        self.album_art_url.as_deref()
    }

    pub fn album_art_asset(&self) -> Option<&str> {
        self.album_art_asset.as_deref()
    }

    pub fn album_art_file(&self) -> Option<&str> {
        self.album_art_file.as_deref()
    }

    pub fn data_buffer(&self) -> Option<&Bytes> {
        self.data_buffer.as_ref()
    }

    /// Returns `true` iff `path` is present and non-empty.
    ///
    /// Playback adapters use this to pick between opening by location and
    /// decoding from the buffer.
    pub fn is_using_path(&self) -> bool {
        self.path.as_deref().is_some_and(|path| !path.is_empty())
    }

    /// The active audio source, or `None` when the track has neither a usable
    /// path nor a buffer.
    pub fn audio_source(&self) -> Option<AudioSource<'_>> {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => Some(AudioSource::Path(path)),
            _ => self.data_buffer.as_ref().map(AudioSource::Buffer),
        }
    }

    /// Every non-empty artwork reference, in url, asset, file order.
    ///
    /// Which one wins is up to the consumer; see [`Self::preferred_artwork`]
    /// for the conventional pick.
    pub fn artwork_sources(&self) -> impl Iterator<Item = ArtworkSource<'_>> {
        [
            self.album_art_url.as_deref().map(ArtworkSource::Url),
            self.album_art_asset.as_deref().map(ArtworkSource::Asset),
            self.album_art_file.as_deref().map(ArtworkSource::File),
        ]
        .into_iter()
        .flatten()
        .filter(|source| !source.as_str().is_empty())
    }

    /// First non-empty artwork reference in url, asset, file order.
    pub fn preferred_artwork(&self) -> Option<ArtworkSource<'_>> {
        self.artwork_sources().next()
    }

    /// Present string fields under their wire keys. The buffer is never
    /// included.
    pub fn to_dictionary(&self) -> Map<String, Value> {
        self.string_fields()
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|v| (key.to_string(), Value::String(v.to_string())))
            })
            .collect()
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.to_dictionary()).to_string()
    }

    fn string_fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            (KEY_PATH, self.path()),
            (KEY_TITLE, self.title()),
            (KEY_ARTIST, self.artist()),
            (KEY_ALBUM_ART_URL, self.album_art_url()),
            (KEY_ALBUM_ART_ASSET, self.album_art_asset()),
            (KEY_ALBUM_ART_FILE, self.album_art_file()),
        ]
    }
}

impl TryFrom<Value> for TrackDescriptor {
    type Error = BridgeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_dictionary(&map)),
            other => {
                let kind = value_kind(&other);
                debug!(value_kind = kind, "Rejected non-object track JSON");
                Err(BridgeError::MalformedInput(format!(
                    "expected a JSON object, found {}",
                    kind
                )))
            }
        }
    }
}

impl TryFrom<&str> for TrackDescriptor {
    type Error = BridgeError;

    fn try_from(json: &str) -> Result<Self> {
        Self::from_json(json)
    }
}

impl FromStr for TrackDescriptor {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

/// Builder for descriptors assembled directly by the host, typically around
/// an in-memory buffer.
#[derive(Debug, Clone, Default)]
pub struct TrackDescriptorBuilder {
    inner: TrackDescriptor,
}

impl TrackDescriptorBuilder {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.inner.artist = Some(artist.into());
        self
    }

    pub fn album_art_url(mut self, url: impl Into<String>) -> Self {
        self.inner.album_art_url = Some(url.into());
        self
    }

    pub fn album_art_asset(mut self, asset: impl Into<String>) -> Self {
        self.inner.album_art_asset = Some(asset.into());
        self
    }

    pub fn album_art_file(mut self, file: impl Into<String>) -> Self {
        self.inner.album_art_file = Some(file.into());
        self
    }

    pub fn data_buffer(mut self, data: impl Into<Bytes>) -> Self {
        self.inner.data_buffer = Some(data.into());
        self
    }

    pub fn build(self) -> TrackDescriptor {
        self.inner
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(value) => Some(value.clone()),
        other => {
            debug!(key, value_kind = value_kind(other), "Ignoring non-string track field");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_from_json_title_and_path() {
        let track = TrackDescriptor::from_json(r#"{"title":"Song A","path":"/music/a.mp3"}"#)
            .unwrap();

        assert_eq!(track.title(), Some("Song A"));
        assert_eq!(track.path(), Some("/music/a.mp3"));
        assert_eq!(track.artist(), None);
        assert_eq!(track.album_art_url(), None);
        assert_eq!(track.album_art_asset(), None);
        assert_eq!(track.album_art_file(), None);
        assert!(track.data_buffer().is_none());
        assert!(track.is_using_path());
    }

    #[test]
    fn test_from_json_empty_object() {
        let track = TrackDescriptor::from_json("{}").unwrap();
        assert_eq!(track, TrackDescriptor::default());
        assert!(!track.is_using_path());
        assert!(track.audio_source().is_none());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = TrackDescriptor::from_json("{not json").unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)));
    }

    #[test]
    fn test_from_json_non_object() {
        for text in ["[]", "\"path\"", "42", "null", "true"] {
            let err = TrackDescriptor::from_json(text).unwrap_err();
            assert!(
                matches!(err, BridgeError::MalformedInput(_)),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_empty_string_is_kept() {
        let track = TrackDescriptor::from_json(r#"{"path":"","title":""}"#).unwrap();
        assert_eq!(track.path(), Some(""));
        assert_eq!(track.title(), Some(""));
        assert!(!track.is_using_path());
    }

    #[test]
    fn test_from_dictionary_never_sets_buffer() {
        let map = object(json!({ "dataBuffer": [1, 2, 3], "title": "x" }));
        let track = TrackDescriptor::from_dictionary(&map);
        assert!(track.data_buffer().is_none());
        assert_eq!(track.title(), Some("x"));
    }

    #[test]
    fn test_non_string_values_are_absent() {
        let map = object(json!({
            "path": 1,
            "title": true,
            "artist": null,
            "albumArtUrl": ["a"],
            "albumArtAsset": { "name": "cover" },
            "albumArtFile": 2.5,
        }));
        assert_eq!(TrackDescriptor::from_dictionary(&map), TrackDescriptor::default());
    }

    #[test]
    fn test_buffer_only_uses_buffer() {
        let track = TrackDescriptor::from_buffer(vec![0x49, 0x44, 0x33]);
        assert!(!track.is_using_path());
        assert_eq!(track.path(), None);
        assert_eq!(
            track.audio_source(),
            Some(AudioSource::Buffer(&Bytes::from_static(&[0x49, 0x44, 0x33])))
        );
    }

    #[test]
    fn test_empty_path_falls_back_to_buffer() {
        let track = TrackDescriptor::builder()
            .path("")
            .data_buffer(Bytes::from_static(b"fLaC"))
            .build();
        assert!(!track.is_using_path());
        assert!(matches!(track.audio_source(), Some(AudioSource::Buffer(_))));
    }

    #[test]
    fn test_path_wins_over_buffer() {
        let track = TrackDescriptor::builder()
            .path("/music/a.mp3")
            .data_buffer(Bytes::from_static(b"fLaC"))
            .build();
        assert!(track.is_using_path());
        assert_eq!(track.audio_source(), Some(AudioSource::Path("/music/a.mp3")));
    }

    #[test]
    fn test_artwork_sources_order() {
        let track = TrackDescriptor::builder()
            .album_art_file("/covers/a.jpg")
            .album_art_asset("")
            .album_art_url("https://example.com/a.jpg")
            .build();

        let sources: Vec<_> = track.artwork_sources().collect();
        assert_eq!(
            sources,
            vec![
                ArtworkSource::Url("https://example.com/a.jpg"),
                ArtworkSource::File("/covers/a.jpg"),
            ]
        );
        assert_eq!(
            track.preferred_artwork(),
            Some(ArtworkSource::Url("https://example.com/a.jpg"))
        );
    }

    #[test]
    fn test_no_artwork() {
        let track = TrackDescriptor::builder().title("Song").build();
        assert!(track.preferred_artwork().is_none());
    }

    #[test]
    fn test_to_dictionary_skips_absent_and_buffer() {
        let track = TrackDescriptor::builder()
            .title("Song A")
            .album_art_asset("cover")
            .data_buffer(vec![1u8, 2, 3])
            .build();

        let map = track.to_dictionary();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("title"), Some(&json!("Song A")));
        assert_eq!(map.get("albumArtAsset"), Some(&json!("cover")));
    }

    #[test]
    fn test_to_json_reparses() {
        let track = TrackDescriptor::builder()
            .path("https://example.com/a.mp3")
            .artist("Artist")
            .album_art_url("https://example.com/a.jpg")
            .build();

        assert_eq!(TrackDescriptor::from_json(&track.to_json()).unwrap(), track);
    }

    #[test]
    fn test_from_str() {
        let track: TrackDescriptor = r#"{"artist":"B"}"#.parse().unwrap();
        assert_eq!(track.artist(), Some("B"));
        assert!("nope".parse::<TrackDescriptor>().is_err());
    }
}
