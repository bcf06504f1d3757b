//! lineconv - LINE SHAPE CONVERTER
//!
//! 텍스트 파일의 각 줄을 형태(날짜, 숫자, 문자 인덱스 지시)에 따라 변환하여
//! `<파일명>.out`으로 저장하는 병렬 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🚀 **병렬 처리**: Rayon을 활용해 파일마다 독립된 작업으로 처리
//! - 🌐 **문화권별 해석**: 원본 문화권 규칙으로 날짜/숫자를 해석하고 고정 형식으로 출력
//! - 🧱 **실패 격리**: 한 파일의 실패가 다른 파일의 처리를 막지 않음
//! - 💾 **원자적 출력**: 모든 줄이 변환된 경우에만 출력 파일을 교체
//! - 📈 **상세 통계**: 성공/실패 파일 수, 규칙별 변환 수, 출력 용량 표시
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (text.txt 변환)
//! lineconv
//!
//! # 여러 파일, 문화권 지정
//! lineconv a.txt "data/*.txt" --culture ru-RU
//! ```

pub mod batch;
pub mod classifier;
pub mod cli;
pub mod culture;
pub mod error;
pub mod pattern;
pub mod processor;
pub mod settings;
pub mod stats;

// Re-exports for convenient access
pub use batch::{run_all, BatchOptions, BatchReport};
pub use classifier::{classify, convert_line, ConversionRule};
pub use cli::{Args, LogLevel};
pub use culture::Culture;
pub use error::{FormatError, LineConvError, Result};
pub use pattern::expand_inputs;
pub use processor::{process_file, ConvertedLine, FileOutcome, SourceLine};
pub use settings::Settings;
pub use stats::{format_bytes, Statistics};
