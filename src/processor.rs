//! 파일 처리 모듈
//!
//! 개별 텍스트 파일의 읽기, 줄 단위 변환, `.out` 파일 쓰기를 담당합니다.

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::classifier::{classify, ConversionRule};
use crate::error::{LineConvError, Result};
use crate::settings::Settings;

/// 변환된 한 줄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedLine {
    pub text: String,
}

impl ConvertedLine {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// 문자 수 (바이트 수가 아님)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for ConvertedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.char_len(), self.text)
    }
}

/// 규칙별 변환 횟수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleCounts {
    pub date_time: usize,
    pub decimal: usize,
    pub char_index: usize,
}

impl RuleCounts {
    pub fn record(&mut self, rule: ConversionRule) {
        match rule {
            ConversionRule::DateTime => self.date_time += 1,
            ConversionRule::Decimal => self.decimal += 1,
            ConversionRule::CharIndexLookup => self.char_index += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.date_time + self.decimal + self.char_index
    }
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct FileOutcome {
    /// 처리된 입력 파일 경로
    pub path: PathBuf,
    /// 작성된 출력 파일 경로 (성공 시)
    pub output: Option<PathBuf>,
    /// 변환된 줄 (성공 시)
    pub lines: Vec<ConvertedLine>,
    /// 규칙별 변환 횟수
    pub rule_counts: RuleCounts,
    /// 출력 파일에 쓴 바이트 수
    pub bytes_written: u64,
    /// 발생한 에러 (실패 시)
    pub errors: Vec<LineConvError>,
}

impl FileOutcome {
    /// 성공 결과 생성
    pub fn success(
        path: PathBuf,
        output: PathBuf,
        lines: Vec<ConvertedLine>,
        rule_counts: RuleCounts,
        bytes_written: u64,
    ) -> Self {
        Self {
            path,
            output: Some(output),
            lines,
            rule_counts,
            bytes_written,
            errors: Vec::new(),
        }
    }

    /// 실패 결과 생성
    pub fn failure(path: PathBuf, errors: Vec<LineConvError>) -> Self {
        Self {
            path,
            output: None,
            lines: Vec::new(),
            rule_counts: RuleCounts::default(),
            bytes_written: 0,
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 입력 파일에 대응하는 출력 경로 (`<파일명>.out`)
pub fn output_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".out");
    PathBuf::from(name)
}

/// 파일에서 읽은 한 줄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 원본 파일 기준 줄 번호 (1부터)
    pub line_number: usize,
    /// 앞뒤 공백이 제거된 내용
    pub text: String,
}

impl SourceLine {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// 변환할 줄 목록 준비
///
/// 빈 줄을 버리고 나머지 줄의 앞뒤 공백을 제거한 뒤,
/// 남은 줄 수를 마지막 줄로 덧붙입니다.
///
/// # Arguments
/// * `path` - 읽을 텍스트 파일 경로
///
/// # Returns
/// 원본 줄 번호가 붙은 줄 목록. 마지막 줄의 번호는 파일의 전체 줄 수 + 1입니다.
pub fn prepare_lines(path: &Path) -> Result<Vec<SourceLine>> {
    let file = File::open(path).map_err(|e| LineConvError::FileRead {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut lines = Vec::new();
    let mut physical_lines = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LineConvError::FileRead {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        physical_lines += 1;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(SourceLine::new(physical_lines, trimmed));
        }
    }

    let count = lines.len();
    lines.push(SourceLine::new(physical_lines + 1, count.to_string()));
    Ok(lines)
}

/// 단일 파일 처리
///
/// 한 줄이라도 변환에 실패하면 출력 파일을 쓰지 않고,
/// 실패한 모든 줄을 에러로 돌려줍니다.
///
/// # Arguments
/// * `path` - 변환할 텍스트 파일 경로
/// * `settings` - 원본 문화권과 상세 출력 여부
///
/// # Returns
/// 처리 결과를 담은 `FileOutcome`
pub fn process_file(path: &Path, settings: &Settings) -> FileOutcome {
    if !path.exists() {
        return FileOutcome::failure(
            path.to_path_buf(),
            vec![LineConvError::FileNotFound {
                path: path.to_path_buf(),
            }],
        );
    }

    if settings.verbose {
        log::info!("파일 처리 중: {}", path.display());
        log::info!("원본 문화권: {}", settings.culture);
    }

    let lines = match prepare_lines(path) {
        Ok(lines) => lines,
        Err(e) => return FileOutcome::failure(path.to_path_buf(), vec![e]),
    };

    let mut converted = Vec::with_capacity(lines.len());
    let mut rule_counts = RuleCounts::default();
    let mut errors = Vec::new();

    for line in lines {
        match classify(&line.text, &settings.culture) {
            Ok((rule, text)) => {
                rule_counts.record(rule);
                converted.push(ConvertedLine::new(text));
            }
            Err(e) => errors.push(LineConvError::MalformedLine {
                file: path.to_path_buf(),
                line_number: line.line_number,
                content: e.line,
            }),
        }
    }

    if !errors.is_empty() {
        return FileOutcome::failure(path.to_path_buf(), errors);
    }

    let output = output_path(path);
    match write_output(&output, &converted) {
        Ok(bytes_written) => FileOutcome::success(
            path.to_path_buf(),
            output,
            converted,
            rule_counts,
            bytes_written,
        ),
        Err(e) => FileOutcome::failure(path.to_path_buf(), vec![e]),
    }
}

/// 출력 파일을 임시 파일로 쓴 뒤 한 번에 교체
fn write_output(output: &Path, lines: &[ConvertedLine]) -> Result<u64> {
    let write_error = |reason: String| LineConvError::WriteError {
        path: output.to_path_buf(),
        reason,
    };

    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = create_temp_in(dir).map_err(|e| write_error(e.to_string()))?;

    let mut bytes_written = 0u64;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        for line in lines {
            let rendered = line.to_string();
            writeln!(writer, "{}", rendered).map_err(|e| write_error(e.to_string()))?;
            bytes_written += rendered.len() as u64 + 1; // +1 for newline
        }
        writer.flush().map_err(|e| write_error(e.to_string()))?;
    }

    tmp.persist(output)
        .map_err(|e| write_error(e.error.to_string()))?;

    Ok(bytes_written)
}

/// 출력 디렉토리에 임시 파일 생성
///
/// 일반 파일과 같은 권한(umask 적용된 0666)으로 만들어
/// 교체된 `.out` 파일이 소유자 전용 권한이 되지 않게 합니다.
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".lineconv").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
