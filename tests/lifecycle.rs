//! Tests for init, shutdown, and worker failure handling.

use echolog::{Error, Level, Logger, WriteErrorPolicy, log_async, log_sync};
use std::fs;
use tempfile::TempDir;

#[test]
fn shutdown_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::builder()
        .directory(tmp.path().to_string_lossy().into_owned())
        .colors(false)
        .build()
        .unwrap();

    log_async!(logger, Level::Info, "before").unwrap();
    logger.shutdown();
    logger.shutdown();
}

#[test]
fn async_after_shutdown_is_rejected() {
    let logger = Logger::new();
    logger.shutdown();

    let err = log_async!(logger, Level::Info, "late").unwrap_err();
    assert!(matches!(err, Error::WorkerStopped));
}

#[test]
fn queued_records_drain_before_shutdown_returns() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::builder()
        .directory(tmp.path().to_string_lossy().into_owned())
        .colors(false)
        .build()
        .unwrap();

    for i in 0..20 {
        log_async!(logger, Level::Info, i).unwrap();
    }
    logger.shutdown();

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    assert_eq!(content.lines().count(), 20);
}

#[test]
fn drop_joins_and_drains() {
    let tmp = TempDir::new().unwrap();
    let path = {
        let logger = Logger::builder()
            .directory(tmp.path().to_string_lossy().into_owned())
            .colors(false)
            .build()
            .unwrap();
        log_async!(logger, Level::Info, "parting").unwrap();
        logger.file_path().unwrap()
    };

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("parting"));
}

#[test]
fn init_empty_is_a_noop() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new();
    assert!(logger.file_path().is_none());

    logger.init("").unwrap();
    assert!(logger.file_path().is_none());

    logger.init(&tmp.path().to_string_lossy()).unwrap();
    let bound = logger.file_path().unwrap();

    logger.init("").unwrap();
    assert_eq!(logger.file_path().unwrap(), bound);
    logger.shutdown();
}

#[test]
fn console_only_before_init() {
    let logger = Logger::new();
    // No path bound: the file side is skipped, the call still succeeds.
    log_sync!(logger, Level::Info, "console only").unwrap();
    assert!(logger.file_path().is_none());
    logger.shutdown();
}

#[test]
fn sync_failure_reports_the_attempted_path() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("gone");
    let logger = Logger::builder()
        .directory(dir.to_string_lossy().into_owned())
        .colors(false)
        .build()
        .unwrap();
    let bound = logger.file_path().unwrap();

    fs::remove_dir_all(&dir).unwrap();

    let err = log_sync!(logger, Level::Error, "x").unwrap_err();
    assert!(err.to_string().contains(&bound.display().to_string()));
    match err {
        Error::LogfileUnavailable { path, .. } => assert_eq!(path, bound),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn worker_survives_failed_file_writes() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("flaky");
    let logger = Logger::builder()
        .directory(dir.to_string_lossy().into_owned())
        .colors(false)
        .on_write_error(WriteErrorPolicy::Ignore)
        .build()
        .unwrap();

    fs::remove_dir_all(&dir).unwrap();
    log_async!(logger, Level::Info, "doomed").unwrap();
    // Give the worker time to hit the failure before the directory returns.
    std::thread::sleep(std::time::Duration::from_millis(100));

    fs::create_dir_all(&dir).unwrap();
    log_async!(logger, Level::Info, "recovered").unwrap();
    logger.shutdown();

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    assert!(content.contains("recovered"));
}
