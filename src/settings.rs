//! 설정 모듈
//!
//! 변환 실행 전에 한 번 읽는 공유 설정(원본 문화권, 상세 출력 여부)을 담당합니다.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::culture::Culture;
use crate::error::{LineConvError, Result};

/// 기본 설정 파일 경로
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// 기본 원본 문화권
pub const DEFAULT_CULTURE_NAME: &str = "en-US";

/// 실행 설정
///
/// 설정 파일 형식:
/// ```json
/// { "SourceCultureName": "ru-RU", "Verbose": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Settings {
    /// 입력 줄 해석에 쓰는 문화권
    #[serde(rename = "SourceCultureName", default = "default_culture")]
    pub culture: Culture,
    /// 파일별 진단 메시지 출력 여부
    #[serde(default)]
    pub verbose: bool,
}

fn default_culture() -> Culture {
    Culture::lookup(DEFAULT_CULTURE_NAME).unwrap_or_default()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            culture: default_culture(),
            verbose: false,
        }
    }
}

impl Settings {
    /// 설정 파일 읽기
    ///
    /// 파일이 없으면 경고를 남기고 기본 설정을 사용합니다.
    /// 파일이 있지만 읽거나 해석할 수 없으면 `ConfigLoad` 에러를 반환합니다.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!(
                "설정 파일 {}이(가) 없어 기본 설정을 사용합니다",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| LineConvError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|reason| LineConvError::ConfigLoad {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_json(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// 문화권 설정
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    /// 상세 출력 설정
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
