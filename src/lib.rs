//! Workspace facade crate.
//!
//! Host plugins depend on `sounds-bridge` to get the track descriptor types
//! from `bridge-traits` and, with the default `runtime` feature, the logging
//! and configuration setup from `core-runtime`.

pub use bridge_traits::{
    ArtworkSource, AudioSource, BridgeError, TrackDescriptor, TrackDescriptorBuilder,
};

#[cfg(feature = "runtime")]
pub use core_runtime::{config::CoreConfig, logging::LoggingConfig};

pub use bridge_traits as bridge;
#[cfg(feature = "runtime")]
pub use core_runtime as runtime;
