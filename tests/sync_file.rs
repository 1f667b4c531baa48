//! Tests for synchronous dispatch and the logfile line format.

use echolog::{Level, Logger, Point, log_sync};
use regex::Regex;
use std::fs;
use tempfile::TempDir;

fn logger_in(dir: &TempDir) -> Logger {
    Logger::builder()
        .directory(dir.path().to_string_lossy().into_owned())
        .colors(false)
        .build()
        .unwrap()
}

#[test]
fn five_sync_levels_write_five_lines() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_in(&tmp);

    for level in [
        Level::Debug,
        Level::Info,
        Level::Ok,
        Level::Warning,
        Level::Error,
    ] {
        log_sync!(logger, level, "TestString").unwrap();
    }

    let path = logger.file_path().unwrap();
    assert!(path.exists(), "logfile missing at {}", path.display());
    assert!(path.starts_with(tmp.path()));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("TestString").count(), 5);
}

#[test]
fn sync_write_is_visible_immediately() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_in(&tmp);

    log_sync!(logger, Level::Info, "first").unwrap();

    // No shutdown, no flush — the sync call alone must make the line durable.
    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    assert!(content.contains("first"));
}

#[test]
fn prefixed_lines_match_the_tagged_pattern() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_in(&tmp);

    for level in [Level::Debug, Level::Info, Level::Warning, Level::Error, Level::Ok] {
        log_sync!(logger, level, "payload").unwrap();
    }

    let pattern = Regex::new(r"^\S.*\[\s*\w+\s*\]").unwrap();
    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    for line in content.lines() {
        assert!(pattern.is_match(line), "unexpected line {line:?}");
    }
}

#[test]
fn empty_level_writes_bare_message() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_in(&tmp);

    log_sync!(logger, Level::Empty, "just this").unwrap();

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    assert_eq!(content, "just this\n");
}

#[test]
fn generated_name_embeds_init_second() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_in(&tmp);

    let path = logger.file_path().unwrap();
    let name = path.file_name().unwrap().to_string_lossy();
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}\.log$").unwrap();
    assert!(pattern.is_match(&name), "unexpected name {name}");
}

#[test]
fn heterogeneous_arguments_join_with_spaces() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_in(&tmp);

    log_sync!(logger, Level::Info, "pos", Point::new(1.5, 2.0), true, 42).unwrap();

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    let line = content.lines().next().unwrap();
    assert!(line.ends_with("pos {1.5; 2} true 42"), "line {line:?}");
}
