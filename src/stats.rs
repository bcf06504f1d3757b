//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::{ColoredString, Colorize};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::processor::FileOutcome;

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 총 파일 수
    pub total_files: usize,
    /// 성공 처리 수
    pub success_count: AtomicUsize,
    /// 실패 파일 수
    pub error_count: AtomicUsize,
    /// 변환된 총 줄 수
    pub lines_converted: AtomicUsize,
    /// 날짜 규칙 적용 수
    pub date_time_lines: AtomicUsize,
    /// 숫자 규칙 적용 수
    pub decimal_lines: AtomicUsize,
    /// 문자 인덱스 규칙 적용 수
    pub char_index_lines: AtomicUsize,
    /// 쓴 총 바이트
    pub total_bytes_written: AtomicU64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 처리 결과 반영
    pub fn record(&self, outcome: &FileOutcome) {
        if !outcome.is_success() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
            return;
        }

        let counts = outcome.rule_counts;
        self.success_count.fetch_add(1, Ordering::Relaxed);
        self.lines_converted
            .fetch_add(counts.total(), Ordering::Relaxed);
        self.date_time_lines
            .fetch_add(counts.date_time, Ordering::Relaxed);
        self.decimal_lines
            .fetch_add(counts.decimal, Ordering::Relaxed);
        self.char_index_lines
            .fetch_add(counts.char_index, Ordering::Relaxed);
        self.total_bytes_written
            .fetch_add(outcome.bytes_written, Ordering::Relaxed);
    }

    /// 성공 수 반환
    pub fn get_success_count(&self) -> usize {
        self.success_count.load(Ordering::Relaxed)
    }

    /// 실패 수 반환
    pub fn get_error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// 변환된 줄 수 반환
    pub fn get_lines_converted(&self) -> usize {
        self.lines_converted.load(Ordering::Relaxed)
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        let success = self.get_success_count();
        let errors = self.get_error_count();
        let failed = if errors > 0 {
            errors.to_string().red()
        } else {
            "0".green()
        };

        print_rule();
        println!("{}", " 📊 변환 결과".bright_white().bold());
        print_rule();

        print_row("📁", "입력 파일", self.total_files.to_string().normal());
        print_row("✅", "성공", success.to_string().green());
        print_row("❌", "실패", failed);
        print_row(
            "📝",
            "변환된 줄",
            format!(
                "{} (날짜 {} / 숫자 {} / 문자 {})",
                self.get_lines_converted(),
                self.date_time_lines.load(Ordering::Relaxed),
                self.decimal_lines.load(Ordering::Relaxed),
                self.char_index_lines.load(Ordering::Relaxed)
            )
            .normal(),
        );
        print_row(
            "📤",
            "출력 용량",
            format_bytes(self.total_bytes_written.load(Ordering::Relaxed)).normal(),
        );
        if let Some(rate) = success_rate(success, self.total_files) {
            print_row("📈", "성공률", format!("{:.1}%", rate).normal());
        }
        print_row("⏱️", "처리 시간", format_duration(self.elapsed()).normal());

        print_rule();
    }
}

fn print_rule() {
    println!("{}", "─".repeat(50).bright_blue());
}

fn print_row(icon: &str, label: &str, value: ColoredString) {
    println!("  {} {:<10} {}", icon, label, value);
}

/// 성공 비율(%) 계산, 파일이 없으면 `None`
fn success_rate(success: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| success as f64 * 100.0 / total as f64)
}

const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// 바이트 수를 사람이 읽기 쉬운 단위로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 1024 단위로 올린 문자열. 바이트 단위는 정수, 그 이상은 소수 둘째 자리까지.
///
/// # Examples
/// ```
/// use lineconv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, BYTE_UNITS[0])
    } else {
        format!("{:.2} {}", value, BYTE_UNITS[unit])
    }
}

/// 경과 시간을 사람이 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `duration` - 경과 시간
///
/// # Returns
/// 1초 미만은 `ms`, 1분 미만은 초(소수 셋째 자리), 그 이상은 `분`/`시간` 단위
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let (hours, mins, secs) = (total_secs / 3600, total_secs / 60 % 60, total_secs % 60);

    match (hours, mins) {
        (0, 0) if total_secs == 0 => format!("{}ms", duration.as_millis()),
        (0, 0) => format!("{:.3}초", duration.as_secs_f64()),
        (0, _) => format!("{}분 {}초", mins, secs),
        _ => format!("{}시간 {}분", hours, mins),
    }
}
