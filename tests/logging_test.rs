//! 로그 보고 테스트
//!
//! 파일별 실패가 로그로 하나씩 보고되는지 확인합니다.
//! 전역 로거를 설치하므로 별도의 테스트 바이너리로 둡니다.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use tempfile::TempDir;

use lineconv::{run_all, BatchOptions, Culture, Settings, Statistics};

/// 기록된 로그를 모아두는 로거
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// 주어진 레벨에서 특정 경로를 언급한 메시지
fn messages_about(level: Level, path: &Path) -> Vec<String> {
    let needle = path.display().to_string();
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, msg)| *l == level && msg.contains(&needle))
        .map(|(_, msg)| msg.clone())
        .collect()
}

fn create_text_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_file_logged_once() {
    install_logger();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let good = create_text_file(temp_dir.path(), "good.txt", "3.14\n");

    let files = vec![missing.clone(), good.clone()];
    let stats = Statistics::new(files.len());
    run_all(&files, &Settings::default(), BatchOptions::default(), &stats);

    let errors = messages_about(Level::Error, &missing);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("파일을 찾을 수 없어"));
    assert!(messages_about(Level::Error, &good).is_empty());
}

#[test]
fn test_each_malformed_line_logged() {
    install_logger();
    let temp_dir = TempDir::new().unwrap();
    let bad = create_text_file(temp_dir.path(), "bad.txt", "what\n1 ab\n\n???\n");
    let good = create_text_file(temp_dir.path(), "fine.txt", "0 z\n");

    let files = vec![bad.clone(), good.clone()];
    let stats = Statistics::new(files.len());
    let report = run_all(&files, &Settings::default(), BatchOptions::default(), &stats);

    let errors = messages_about(Level::Error, &bad);
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors.iter().any(|m| m.contains("bad.txt:1")));
    assert!(errors.iter().any(|m| m.contains("bad.txt:4")));
    assert!(messages_about(Level::Error, &good).is_empty());
    assert!(report.outcomes[1].is_success());
}

#[test]
fn test_verbose_notices_logged() {
    install_logger();
    let temp_dir = TempDir::new().unwrap();
    let path = create_text_file(temp_dir.path(), "verbose.txt", "1,5\n");
    let settings = Settings::default()
        .with_culture(Culture::lookup("de-DE").unwrap())
        .with_verbose(true);

    let stats = Statistics::new(1);
    run_all(&[path.clone()], &settings, BatchOptions::default(), &stats);

    let notices = messages_about(Level::Info, &path);
    assert_eq!(notices.len(), 1, "{notices:?}");
    assert!(LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .any(|(l, msg)| *l == Level::Info && msg.contains("de-DE")));
}
