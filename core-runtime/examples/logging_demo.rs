//! Track bridge logging demonstration
//!
//! Parses a few host payloads with logging enabled so the bridge's debug
//! events are visible.
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run -p core-runtime --example logging_demo
//!
//! # JSON format
//! cargo run -p core-runtime --example logging_demo -- json
//!
//! # Compact format with a custom filter
//! cargo run -p core-runtime --example logging_demo -- compact "bridge_traits=trace"
//! ```

use bridge_traits::time::{ConsoleLogger, LogLevel};
use bridge_traits::TrackDescriptor;
use core_runtime::config::CoreConfig;
use core_runtime::logging::{strip_path, LogFormat};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::default(),
    };

    let mut builder = CoreConfig::builder()
        .log_format(format)
        .log_level(LogLevel::Trace)
        .logger_sink(Arc::new(ConsoleLogger {
            min_level: LogLevel::Debug,
        }));

    if let Some(filter) = args.get(2) {
        builder = builder.log_filter(filter.clone());
    }

    let config = builder.build().expect("Invalid configuration");
    core_runtime::init(&config).expect("Failed to initialize logging");

    info!(format = ?format, "=== Track Bridge Demo ===");

    let payloads = [
        r#"{"title":"Song A","path":"/home/user/Music/a.mp3"}"#,
        r#"{"title":42,"albumArtUrl":"https://example.com/a.jpg"}"#,
        "{not json",
    ];

    for payload in payloads {
        match TrackDescriptor::from_json(payload) {
            Ok(track) => info!(
                using_path = track.is_using_path(),
                path = strip_path(track.path().unwrap_or_default()),
                "Accepted track"
            ),
            Err(e) => warn!(error = %e, "Rejected track"),
        }
    }

    let recorded = TrackDescriptor::builder()
        .title("Voice memo")
        .data_buffer(vec![0u8; 1024])
        .build();
    info!(
        using_path = recorded.is_using_path(),
        buffer_len = recorded.data_buffer().map(|b| b.len()).unwrap_or(0),
        "Built in-memory track"
    );

    info!("=== Demo Complete ===");
}
