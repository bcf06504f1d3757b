//! 일괄 처리 모듈
//!
//! 여러 입력 파일을 병렬로 처리하고, 파일별 실패를 서로 격리하여 수집합니다.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::processor::{process_file, FileOutcome};
use crate::settings::Settings;
use crate::stats::Statistics;

/// 일괄 처리 결과 (입력 순서 유지)
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// 실패한 파일 목록
    pub fn failed_files(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.path.as_path())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }

    /// 전체 에러 수
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.errors.len()).sum()
    }
}

/// 일괄 처리 옵션
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// 진행률 바 표시 여부
    pub show_progress: bool,
}

/// 모든 파일을 병렬로 처리
///
/// 각 파일은 독립된 작업으로 공유 스레드 풀에서 실행됩니다.
/// 한 파일의 실패는 다른 파일의 처리나 보고를 막지 않으며,
/// 모든 작업이 끝난 뒤 파일별 에러를 하나씩 로그로 남깁니다.
///
/// # Arguments
/// * `files` - 처리할 파일 경로 목록
/// * `settings` - 모든 파일에 공유되는 설정
/// * `options` - 진행률 표시 옵션
/// * `stats` - 결과가 누적될 통계
///
/// # Returns
/// 입력 순서대로 정렬된 파일별 결과
pub fn run_all(
    files: &[PathBuf],
    settings: &Settings,
    options: BatchOptions,
    stats: &Statistics,
) -> BatchReport {
    let pb = if options.show_progress {
        create_progress_bar(files.len())
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let outcome = process_file(path, settings);
            stats.record(&outcome);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let report = BatchReport { outcomes };
    report_failures(&report);
    report
}

/// 실패한 파일의 에러를 하나씩 로그로 남김
pub fn report_failures(report: &BatchReport) {
    for outcome in &report.outcomes {
        for error in &outcome.errors {
            log::error!("{}", error);
        }
    }
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}
