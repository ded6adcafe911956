//! Integration tests for logging system

use bridge_traits::time::{ConsoleLogger, LogLevel};
use bridge_traits::TrackDescriptor;
use core_runtime::config::CoreConfig;
use core_runtime::logging::{redact_if_sensitive, strip_path, LogFormat, LoggingConfig};
use core_runtime::Error;
use std::sync::Arc;

#[test]
fn test_init_once_per_process() {
    // Only this test installs the global subscriber in this binary
    let config = CoreConfig::builder()
        .log_format(LogFormat::Compact)
        .log_level(LogLevel::Debug)
        .logger_sink(Arc::new(ConsoleLogger {
            min_level: LogLevel::Warn,
        }))
        .build()
        .unwrap();

    core_runtime::init(&config).unwrap();

    // Logging is live; construction still behaves the same
    let track = TrackDescriptor::from_json(r#"{"path":"/music/a.mp3","title":1}"#).unwrap();
    assert!(track.is_using_path());
    assert!(TrackDescriptor::from_json("{not json").is_err());

    match core_runtime::init(&config) {
        Err(Error::AlreadyInitialized(_)) => {}
        other => panic!("second init should fail, got {:?}", other),
    }
}

#[test]
fn test_logging_config_builder() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Debug)
        .with_pii_redaction(true)
        .with_spans(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Debug);
    assert!(config.redact_pii);
    assert!(config.enable_spans);
}

#[test]
fn test_pii_redaction_secrets() {
    assert_eq!(redact_if_sensitive("access_token", "abc"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("api_key", "lastfm-key"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("password", "hunter2"), "[REDACTED]");
}

#[test]
fn test_pii_redaction_emails() {
    let redacted = redact_if_sensitive("artist", "user@example.com");

    assert!(redacted.starts_with('u'));
    assert!(redacted.contains("[REDACTED]"));
    assert!(!redacted.contains("example.com"));
}

#[test]
fn test_pii_redaction_normal_values() {
    assert_eq!(redact_if_sensitive("title", "Song Name"), "Song Name");
    assert_eq!(redact_if_sensitive("value_kind", "number"), "number");
    assert_eq!(
        redact_if_sensitive("title", "Live @ Wembley vol. 2"),
        "Live @ Wembley vol. 2"
    );
}

#[test]
fn test_path_stripping() {
    // Unix paths
    assert_eq!(strip_path("/home/user/music/song.mp3"), "song.mp3");

    // Windows paths
    assert_eq!(strip_path("C:\\Users\\John\\Music\\song.mp3"), "song.mp3");

    // URIs keep only the last segment
    assert_eq!(strip_path("https://cdn.example.com/covers/a.jpg"), "a.jpg");
    assert_eq!(
        strip_path("https://cdn.example.com/a.mp3?token=s3cr3t&sig=abc"),
        "a.mp3"
    );
    assert_eq!(strip_path("file:///music/a.mp3#t=30"), "a.mp3");

    // Edge cases
    assert_eq!(strip_path("filename.txt"), "filename.txt");
    assert_eq!(strip_path("/var/log/"), "");
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    assert_eq!(LogFormat::default(), LogFormat::Pretty);

    #[cfg(not(debug_assertions))]
    assert_eq!(LogFormat::default(), LogFormat::Json);
}
