//! # Core Configuration Module
//!
//! Runtime configuration the host supplies when it attaches the plugin.
//!
//! ## Overview
//!
//! [`CoreConfig`] is assembled through [`CoreConfigBuilder`]. The builder
//! validates up front, so a bad log filter fails at `build()` rather than
//! when logging is installed.
//!
//! ## Usage
//!
//! ```
//! use bridge_traits::time::{ConsoleLogger, LogLevel};
//! use core_runtime::config::CoreConfig;
//! use core_runtime::logging::LogFormat;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .log_format(LogFormat::Compact)
//!     .log_level(LogLevel::Debug)
//!     .logger_sink(Arc::new(ConsoleLogger::default()))
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(config.logging.level, LogLevel::Debug);
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .log_filter("bridge_traits=[")
//!     .build()
//!     .expect("Should fail - invalid filter");
//! ```

use crate::error::Result;
use crate::logging::{build_filter, LogFormat, LoggingConfig};
use bridge_traits::time::{LogLevel, LoggerSink};
use std::sync::Arc;

/// Runtime configuration for the track bridge.
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Logging setup, including the optional host sink
    pub logging: LoggingConfig,
}

impl CoreConfig {
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for [`CoreConfig`].
#[derive(Debug, Default)]
pub struct CoreConfigBuilder {
    logging: LoggingConfig,
}

impl CoreConfigBuilder {
    /// Replace the whole logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.logging = self.logging.with_format(format);
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.logging = self.logging.with_level(level);
        self
    }

    /// Custom `EnvFilter` directive string; overrides `log_level`.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging = self.logging.with_filter(filter);
        self
    }

    pub fn redact_pii(mut self, redact: bool) -> Self {
        self.logging = self.logging.with_pii_redaction(redact);
        self
    }

    /// Mirror log events into the host's logging pipeline.
    pub fn logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logging = self.logging.with_logger_sink(sink);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::error::Error::Config) when the log
    /// filter does not parse.
    pub fn build(self) -> Result<CoreConfig> {
        build_filter(&self.logging)?;

        Ok(CoreConfig {
            logging: self.logging,
        })
    }
}
