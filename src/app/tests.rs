//! Tests for the application module.

use super::*;
use crate::logging::LoggerFactory;
use crate::testutil::CaptureSink;

fn settings_named(name: &str) -> AppSettings {
    AppSettings {
        name: name.to_string(),
    }
}

// ==================== Run sequence tests ====================

#[test]
fn test_run_emits_seven_records_in_order_without_filtering() {
    let sink = CaptureSink::new();
    let factory = LoggerFactory::new(sink.clone(), Severity::Trace);
    let app = Application::new(factory.logger("Application"), settings_named("demo"));

    app.run();

    let records = sink.records();
    assert_eq!(records.len(), 7);

    let severities: Vec<Severity> = records.iter().map(|r| r.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Critical,
            Severity::Error,
            Severity::Warn,
            Severity::Info,
            Severity::Debug,
            Severity::Trace,
            Severity::Info,
        ]
    );

    assert_eq!(records[0].message, "Log Critical");
    assert_eq!(records[1].message, "Log Error");
    assert_eq!(records[2].message, "Log Warning");
    assert_eq!(records[3].message, "Log Information");
    assert_eq!(records[4].message, "Log Debug");
    assert_eq!(records[5].message, "Log Trace");
    assert_eq!(
        records[6].message,
        "This is a console application for demo"
    );
}

#[test]
fn test_run_with_default_filter_delivers_five_records() {
    let sink = CaptureSink::new();
    let factory = LoggerFactory::new(sink.clone(), Severity::Info);
    let app = Application::new(factory.logger("Application"), settings_named("demo"));

    app.run();

    // Debug and trace are suppressed by the default minimum level.
    let records = sink.records();
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.severity >= Severity::Info));
}

#[test]
fn test_run_with_default_settings_renders_empty_name() {
    let sink = CaptureSink::new();
    let factory = LoggerFactory::new(sink.clone(), Severity::Trace);
    let app = Application::new(factory.logger("Application"), AppSettings::default());

    app.run();

    let records = sink.records();
    assert_eq!(
        records.last().unwrap().message,
        "This is a console application for "
    );
}

#[test]
fn test_failed_final_emission_is_downgraded_to_error_record() {
    let sink = CaptureSink::failing_on("console application");
    let factory = LoggerFactory::new(sink.clone(), Severity::Trace);
    let app = Application::new(factory.logger("Application"), settings_named("demo"));

    app.run();

    // Six static records plus exactly one error record for the failure.
    let records = sink.records();
    assert_eq!(records.len(), 7);

    let last = records.last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert!(last.message.contains("sink rejected message"));
}

// ==================== Settings binding tests ====================

#[test]
fn test_bind_reads_name_from_section() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.json"),
        r#"{"app": {"name": "bound", "log_level": "debug"}}"#,
    )
    .unwrap();

    let root = crate::config::ConfigBuilder::new(dir.path())
        .json_file("appsettings.json", false)
        .build()
        .unwrap();

    let settings = AppSettings::bind(&root.section("app")).unwrap();
    assert_eq!(settings.name, "bound");
}

#[test]
fn test_bind_empty_section_defaults_name() {
    let dir = tempfile::TempDir::new().unwrap();

    let root = crate::config::ConfigBuilder::new(dir.path())
        .json_file("missing.json", true)
        .build()
        .unwrap();

    let settings = AppSettings::bind(&root.section("app")).unwrap();
    assert_eq!(settings.name, "");
}

#[test]
fn test_bind_fails_on_shape_mismatch() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.json"),
        r#"{"app": {"name": {"first": "not-a-string"}}}"#,
    )
    .unwrap();

    let root = crate::config::ConfigBuilder::new(dir.path())
        .json_file("appsettings.json", false)
        .build()
        .unwrap();

    assert!(AppSettings::bind(&root.section("app")).is_err());
}
