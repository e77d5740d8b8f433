//! Integration tests for the log adapter
//!
//! These tests verify:
//! - Severity dispatch reaches exactly one backend method
//! - Unknown levels use the generic fallback
//! - Placeholder substitution (`%process`, `%level`, `%date`)
//! - Backend error propagation
//! - Configuration-driven construction
//! - File and JSON backends end to end

use chrono::{Datelike, FixedOffset, Local, TimeZone};
use rust_log_adapter::backends::{BackendRecord, FileBackend, JsonBackend};
use rust_log_adapter::core::timestamp::{self, fixed_clock};
use rust_log_adapter::prelude::*;
use rust_log_adapter::Clock;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn fixed_now() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .expect("valid offset")
        .with_ymd_and_hms(2023, 7, 14, 9, 15, 0)
        .single()
        .expect("valid datetime")
}

fn memory_adapter(process_name: &str) -> (LogAdapter, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let adapter = LogAdapter::builder()
        .backend(backend.clone())
        .process_name(process_name)
        .clock(fixed_clock(fixed_now()))
        .build()
        .expect("backend supplied");
    (adapter, backend)
}

#[test]
fn test_each_severity_calls_only_its_method() {
    for severity in Severity::ALL {
        let (mut adapter, backend) = memory_adapter("idp");
        adapter.set_format("%process: ");

        adapter
            .log(severity.as_level(), "event")
            .expect("memory backend accepts");

        let calls = backend.calls();
        assert_eq!(calls.len(), 1, "exactly one backend call for {}", severity);
        assert_eq!(calls[0].method, BackendMethod::from(severity));
        assert_eq!(calls[0].level, severity.as_level());
        assert_eq!(calls[0].message, "idp: event");
    }
}

#[test]
fn test_unmapped_levels_use_generic_log() {
    let (adapter, backend) = memory_adapter("idp");

    for level in [-1, 8, 100, 999, i32::MIN, i32::MAX] {
        adapter.log(level, "unknown").expect("memory backend accepts");
    }

    let calls = backend.calls();
    assert_eq!(calls.len(), 6);
    for call in &calls {
        assert_eq!(call.method, BackendMethod::Log);
        assert_eq!(call.message, "unknown");
    }
    assert_eq!(calls[3].level, 999);
    assert_eq!(adapter.metrics().fallback_dispatches(), 6);
}

#[test]
fn test_concrete_scenario_with_real_clock() {
    let backend = Arc::new(MemoryBackend::new());
    let mut adapter = LogAdapter::builder()
        .backend(backend.clone())
        .process_name("Auth")
        .build()
        .expect("backend supplied");
    adapter.set_format("[%process] %date{%Y} - ");

    adapter.log(Severity::Info.as_level(), "user login").unwrap();

    let year = Local::now().year();
    let calls = backend.calls();
    assert_eq!(calls[0].method, BackendMethod::Info);
    // The process timezone may differ from Local around New Year
    assert!(
        (year - 1..=year + 1)
            .any(|y| calls[0].message == format!("[Auth] {} - user login", y)),
        "unexpected line: {}",
        calls[0].message
    );
}

#[test]
fn test_default_date_pattern() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("%date ");

    adapter.info("tick").unwrap();
    assert_eq!(backend.messages(), vec!["Jul 14 09:15:00 tick".to_string()]);
}

#[test]
fn test_custom_date_pattern() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("%date{%Y-%m-%d %H:%M} %process ");

    adapter.info("tick").unwrap();
    assert_eq!(backend.messages(), vec!["2023-07-14 09:15 idp tick".to_string()]);
}

#[test]
fn test_unclosed_date_brace_stays_literal() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("%date{%Y ");

    adapter.info("tick").unwrap();
    // Bare `%date` is rendered; the brace and its text are left as typed
    assert_eq!(backend.messages(), vec!["Jul 14 09:15:00{%Y tick".to_string()]);
}

#[test]
fn test_only_first_date_token_is_substituted() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("%date{%Y} %date{%m} ");

    adapter.info("x").unwrap();
    assert_eq!(backend.messages(), vec!["2023 %date{%m} x".to_string()]);
}

#[test]
fn test_process_token_fully_replaced() {
    let (mut adapter, backend) = memory_adapter("plain-name");
    adapter.set_format("%process|%process|");

    adapter.debug("body %process").unwrap();
    assert_eq!(backend.messages(), vec!["plain-name|plain-name|body plain-name".to_string()]);
}

#[test]
fn test_message_token_splices_when_selected() {
    let backend = Arc::new(MemoryBackend::new());
    let adapter = LogAdapter::builder()
        .backend(backend.clone())
        .process_name("plain-name")
        .format("%process|%msg|%process")
        .composition(Composition::MessageToken)
        .clock(adapter_clock())
        .build()
        .expect("backend supplied");

    adapter.debug("body %process").unwrap();
    assert_eq!(backend.messages(), vec!["plain-name|body plain-name|plain-name".to_string()]);
}

#[test]
fn test_message_token_is_literal_by_default() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("%msg: ");

    adapter.info("x").unwrap();
    assert_eq!(backend.messages(), vec!["%msg: x".to_string()]);
}

#[test]
fn test_level_token_in_process_name_is_substituted() {
    // `%process` is replaced first, so `%level` coming from the name is expanded next
    let (mut adapter, backend) = memory_adapter("a%level");
    adapter.set_format("%process ");

    adapter.info("x").unwrap();
    assert_eq!(backend.messages(), vec!["a x".to_string()]);
}

#[test]
fn test_date_token_in_process_name_stays_literal() {
    // The date token is taken from the format, so a bare `%date` from the name is kept
    let (mut adapter, backend) = memory_adapter("%date");
    adapter.set_format("%date{%Y} %process ");

    adapter.info("x").unwrap();
    assert_eq!(backend.messages(), vec!["2023 %date x".to_string()]);
}

#[test]
fn test_level_token_renders_empty() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("%process %level");

    adapter.error("boom").unwrap();
    assert_eq!(backend.messages(), vec!["idp boom".to_string()]);
}

#[test]
fn test_tokenless_format_is_concatenated() {
    let (mut adapter, backend) = memory_adapter("idp");
    adapter.set_format("plain prefix :: ");

    adapter.notice("message").unwrap();
    assert_eq!(backend.messages(), vec!["plain prefix :: message".to_string()]);
}

#[test]
fn test_set_format_twice_is_idempotent() {
    let (mut adapter, backend) = memory_adapter("idp");

    adapter.set_format("[%process] %date{%H} ");
    adapter.warning("a").unwrap();
    adapter.set_format("[%process] %date{%H} ");
    adapter.warning("a").unwrap();

    let messages = backend.messages();
    assert_eq!(messages[0], messages[1]);
    assert_eq!(messages[0], "[idp] 09 a");
}

#[test]
fn test_backend_error_propagates_and_later_calls_succeed() {
    let (adapter, backend) = memory_adapter("idp");
    backend.fail_next(1, "connection reset");

    let err = adapter.alert("lost").unwrap_err();
    assert!(matches!(err, AdapterError::Backend(_)));
    assert_eq!(err.to_string(), "connection reset");

    adapter.alert("kept").unwrap();
    assert_eq!(backend.messages(), vec!["kept".to_string()]);
    assert_eq!(adapter.metrics().total_dispatched(), 2);
    assert_eq!(adapter.metrics().backend_failures(), 1);
}

#[test]
fn test_missing_backend_is_configuration_error() {
    let config = AdapterConfig::from_json_str(r#"{"logging.processname": "idp"}"#).unwrap();
    let err = LogAdapter::from_config(&config, None).unwrap_err();

    assert!(matches!(err, AdapterError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("backend"));
}

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logging.json");
    fs::write(
        &config_path,
        r#"{
            "logging.processname": "portal",
            "logging.format": "%process %level: ",
            "logging.level_token": "name"
        }"#,
    )
    .expect("Failed to write config");

    let config = AdapterConfig::from_file(&config_path).expect("valid config file");
    let backend = Arc::new(MemoryBackend::new());
    let shared: Arc<dyn StructuredBackend> = backend.clone();
    let adapter = LogAdapter::from_config(&config, Some(shared)).unwrap();

    adapter.critical("disk full").unwrap();
    assert_eq!(backend.messages(), vec!["portal critical: disk full".to_string()]);
}

#[test]
fn test_shared_backend_between_adapters() {
    let backend = Arc::new(MemoryBackend::new());
    let mut first = LogAdapter::builder()
        .backend(backend.clone())
        .process_name("first")
        .build()
        .unwrap();
    let mut second = LogAdapter::builder()
        .backend(backend.clone())
        .process_name("second")
        .build()
        .unwrap();
    first.set_format("%process ");
    second.set_format("%process ");

    first.info("a").unwrap();
    second.info("b").unwrap();

    assert_eq!(backend.messages(), vec!["first a".to_string(), "second b".to_string()]);
}

#[test]
fn test_init_timezone_first_call_wins() {
    assert!(timestamp::init_timezone(TimezoneSetting::OffsetMinutes(24 * 60)).is_err());

    let installed = timestamp::init_timezone(TimezoneSetting::Utc).unwrap();
    let again = timestamp::init_timezone(TimezoneSetting::OffsetMinutes(60)).unwrap();

    assert!(installed);
    assert!(!again);
    assert_eq!(timestamp::configured_timezone(), TimezoneSetting::Utc);
}

#[test]
fn test_file_backend_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("adapter.log");

    let backend = Arc::new(FileBackend::new(&log_file).expect("Failed to create backend"));
    let adapter = LogAdapter::builder()
        .backend(backend.clone())
        .process_name("idp")
        .format("%process ")
        .clock(adapter_clock())
        .build()
        .unwrap();

    adapter.error("db down\nINFO forged").unwrap();
    adapter.log(55, "custom").unwrap();
    backend.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "Injected newline must not split the record");
    assert!(lines[0].ends_with("[ERROR] idp db down\\nINFO forged"));
    assert!(lines[1].ends_with("[LEVEL(55)] idp custom"));
}

fn adapter_clock() -> Clock {
    fixed_clock(fixed_now())
}

#[test]
fn test_json_backend_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("adapter.jsonl");

    let backend = Arc::new(JsonBackend::new(&log_file).expect("Failed to create backend"));
    let mut adapter = LogAdapter::builder()
        .backend(backend.clone())
        .process_name("idp")
        .clock(adapter_clock())
        .build()
        .unwrap();
    adapter.set_format("%date{%H:%M} %process ");

    adapter.warning("slow response").unwrap();
    backend.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let record: BackendRecord =
        serde_json::from_str(content.lines().next().expect("one line")).expect("valid JSON");
    assert_eq!(record.severity, Some(Severity::Warning));
    assert_eq!(record.level, 4);
    assert_eq!(record.message, "09:15 idp slow response");
}
