//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::settings::DEFAULT_SETTINGS_PATH;

/// 인자가 없을 때 처리할 기본 입력 파일
pub const DEFAULT_INPUT: &str = "text.txt";

/// 로그 레벨
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// lineconv CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "lineconv",
    author = "YourName <your@email.com>",
    version,
    about = "LINE SHAPE CONVERTER - 텍스트 파일의 각 줄을 형태에 따라 변환하는 병렬 CLI 도구",
    long_about = r#"
LINE SHAPE CONVERTER
====================

각 입력 파일의 빈 줄이 아닌 줄을 읽어 형태에 따라 변환하고,
`<파일명>.out`에 `<문자 수> <변환 결과>` 형식으로 저장합니다.
마지막 줄에는 읽은 줄 수가 덧붙여집니다.

변환 규칙 (먼저 맞는 규칙 적용):
  1. 날짜/시간  → MM/dd/yyyy HH:mm:ss
  2. 숫자       → 고정 형식 (소수점은 '.')
  3. "<i> <단어>" → 단어의 i번째 문자

예제:
  lineconv
  lineconv a.txt b.txt
  lineconv "data/*.txt" --culture ru-RU --verbose
  lineconv a.txt --settings conf/settings.json -j 4
"#
)]
pub struct Args {
    /// 변환할 파일 (glob 패턴 허용, 기본값: text.txt)
    #[arg(default_value = DEFAULT_INPUT)]
    pub files: Vec<String>,

    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// 설정 파일의 원본 문화권 대신 사용할 문화권 (예: ru-RU)
    #[arg(short, long)]
    pub culture: Option<String>,

    /// 상세 출력 모드 (설정 파일보다 우선)
    #[arg(short, long)]
    pub verbose: bool,

    /// 병렬 처리 스레드 수 (기본값: CPU 코어 수)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// 진행률 바 숨기기
    #[arg(long)]
    pub no_progress: bool,

    /// 로그 레벨
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
