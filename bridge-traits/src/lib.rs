//! # Host Bridge Types
//!
//! Values that cross the boundary between a host application and the
//! platform audio subsystem.
//!
//! ## Overview
//!
//! The host describes each track as JSON text, an already-decoded mapping, or
//! a raw audio buffer. [`TrackDescriptor`] normalizes all three into one
//! immutable value, and playback adapters read the active source from it
//! through [`AudioSource`].
//!
//! ## Modules
//!
//! - [`track`] - [`TrackDescriptor`] and its builder
//! - [`playback`] - [`AudioSource`] / [`ArtworkSource`] views adapters switch on
//! - [`time`] - [`LoggerSink`](time::LoggerSink) for mirroring logs into host logging
//! - [`error`] - [`BridgeError`]
//!
//! ## Error Handling
//!
//! Descriptor construction fails only with
//! [`BridgeError::MalformedInput`], when JSON text is unparsable or is not an
//! object. Every other anomaly in the input degrades to an absent field.
//!
//! ## Thread Safety
//!
//! Descriptors own their data and are `Send + Sync`. Sinks require
//! [`PlatformSendSync`](platform::PlatformSendSync), which is `Send + Sync` on
//! native targets only.

pub mod error;
pub mod platform;
pub mod playback;
pub mod time;
pub mod track;

pub use error::BridgeError;

// Re-export commonly used types
pub use playback::{ArtworkSource, AudioSource};
pub use time::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use track::{TrackDescriptor, TrackDescriptorBuilder, RECOGNIZED_KEYS};
