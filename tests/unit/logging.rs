//! Unit tests for log format selection

use btcsignal::logging::LogFormat;

#[test]
fn test_production_logs_json() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("PROD"), LogFormat::Json);
}

#[test]
fn test_other_environments_log_pretty() {
    assert_eq!(LogFormat::for_environment("sandbox"), LogFormat::Pretty);
    assert_eq!(LogFormat::for_environment("development"), LogFormat::Pretty);
    assert_eq!(LogFormat::for_environment(""), LogFormat::Pretty);
}
