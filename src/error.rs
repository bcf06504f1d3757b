//! 에러 타입 정의 모듈
//!
//! lineconv에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// lineconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum LineConvError {
    /// 설정 파일을 읽거나 해석할 수 없음 (실행 전체 중단)
    #[error("설정 파일을 읽을 수 없습니다 ({path}): {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// 입력 파일이 존재하지 않음
    #[error("파일을 찾을 수 없어 변환하지 못했습니다: {path}")]
    FileNotFound { path: PathBuf },

    /// 입력 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({file}): {reason}")]
    FileRead { file: PathBuf, reason: String },

    /// 어떤 변환 규칙에도 맞지 않는 줄
    #[error("잘못된 줄 ({file}:{line_number}): {content:?}")]
    MalformedLine {
        file: PathBuf,
        line_number: usize,
        content: String,
    },

    /// 출력 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// 스레드 풀 초기화 실패
    #[error("스레드 풀 초기화 실패: {reason}")]
    ThreadPoolError { reason: String },
}

/// 한 줄을 어떤 규칙으로도 변환할 수 없을 때의 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("잘못된 줄: {line:?}")]
pub struct FormatError {
    pub line: String,
}

/// lineconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, LineConvError>;
