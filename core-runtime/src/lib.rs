//! # Core Runtime Module
//!
//! Runtime infrastructure around the track bridge:
//! - Logging and tracing setup, with forwarding into host log pipelines
//! - Configuration management
//!
//! Hosts build a [`CoreConfig`](config::CoreConfig) once and pass it to
//! [`init`] when the plugin is attached.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

/// Install runtime services described by `config`.
///
/// # Errors
///
/// Fails when logging was already initialized in this process.
pub fn init(config: &config::CoreConfig) -> Result<()> {
    logging::init_logging(config.logging.clone())?;
    tracing::debug!(format = ?config.logging.format, "Runtime initialized");
    Ok(())
}
