//! lineconv - LINE SHAPE CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use lineconv::{
    batch::{run_all, BatchOptions, BatchReport},
    cli::{Args, LogLevel},
    culture::{Culture, UnknownCultureError},
    error::LineConvError,
    pattern::expand_inputs,
    settings::Settings,
    stats::Statistics,
};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run(&args) {
        Ok(report) if report.has_failures() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // 설정 단계의 실패만 전체 실행을 중단
            log::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<BatchReport> {
    // 스레드 풀 설정
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| LineConvError::ThreadPoolError {
                reason: e.to_string(),
            })?;
    }

    let settings = load_settings(args)?;
    let files = expand_inputs(&args.files);

    print_header(&settings, &files);

    let stats = Statistics::new(files.len());
    let options = BatchOptions {
        show_progress: !args.no_progress,
    };
    let report = run_all(&files, &settings, options, &stats);

    print_failed_files(&report);
    stats.print_summary();

    if report.has_failures() {
        println!(
            "\n{} {} 개의 파일을 변환하지 못했습니다.\n",
            "⚠️".bright_yellow(),
            report.failed_files().len().to_string().red()
        );
    } else {
        println!("\n{} 모든 파일을 변환했습니다!\n", "✅".bright_green());
    }

    Ok(report)
}

/// 설정 파일을 읽고 명령줄 옵션을 덮어씀
fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::load(&args.settings)?;

    if let Some(ref name) = args.culture {
        let culture = Culture::lookup(name)
            .ok_or_else(|| UnknownCultureError(name.clone()))
            .context("--culture 옵션을 해석할 수 없습니다")?;
        settings = settings.with_culture(culture);
    }

    if args.verbose {
        settings = settings.with_verbose(true);
    }

    Ok(settings)
}

/// 로거 초기화
fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.to_filter())
        .init();
}

/// 헤더 출력
fn print_header(settings: &Settings, files: &[PathBuf]) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 LINE SHAPE CONVERTER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 입력 파일 수: {}",
        "📋".bright_white(),
        files.len().to_string().bright_green()
    );
    println!("  {} 원본 문화권: {}", "🌐".bright_cyan(), settings.culture);

    if settings.verbose {
        println!("  {} {}", "🔍".bright_magenta(), "상세 출력 모드".magenta());
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 실패 파일 목록 출력
fn print_failed_files(report: &BatchReport) {
    if !report.has_failures() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for outcome in report.outcomes.iter().filter(|o| !o.is_success()) {
        println!(
            "  {} {} ({} 개의 에러)",
            "•".red(),
            outcome.path.display(),
            outcome.errors.len()
        );
    }
}
