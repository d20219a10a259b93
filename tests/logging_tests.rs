// Tests for the logging pipeline
//
// `logging::init` installs a process-global subscriber, so everything that
// needs an installed pipeline lives in one test.

use testquip::config::Config;
use testquip::logging::{self, LoggingError};
use tracing::info;

#[test]
fn test_init_writes_formatted_lines_to_log_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("logs").join("info.log");

    let mut config = Config::default();
    config.log.file = log_path.display().to_string();
    config.console.color = false;

    logging::init(&config).expect("Failed to install logging pipeline");

    info!("✅ Test Completed: login works - Status: passed - Time taken: 0.12s");
    info!("✨ All tests completed.");

    let content = std::fs::read_to_string(&log_path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    // `<timestamp> <level>: <message>` shape
    assert!(lines[0].contains(" info: "));
    assert!(lines[0].ends_with("Status: passed - Time taken: 0.12s"));
    let timestamp = lines[0].split(' ').next().expect("timestamp expected");
    assert!(timestamp.contains('T'));
    assert!(lines[1].ends_with("✨ All tests completed."));

    // A second install must fail, the subscriber is process-global
    let err = logging::init(&config).expect_err("second init must fail");
    assert!(matches!(err, LoggingError::AlreadyInstalled(_)));
}

#[test]
fn test_init_rejects_unopenable_log_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    // Parent path is a file, so the logs directory cannot be created
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("Failed to write blocker file");

    let mut config = Config::default();
    config.log.file = blocker.join("info.log").display().to_string();

    let err = logging::init(&config).expect_err("init must fail");
    assert!(matches!(err, LoggingError::OpenLogFile { .. }));
    assert!(err.to_string().contains("failed to open log file"));
}
