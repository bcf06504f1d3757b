//! 줄 분류 및 변환 모듈
//!
//! 한 줄의 형태를 판별하여 날짜, 숫자, 문자 인덱스 규칙 중
//! 처음으로 적용되는 규칙으로 변환합니다.

use std::fmt;

use crate::culture::{format_date_time, format_number, Culture};
use crate::error::FormatError;

/// 변환 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionRule {
    /// 날짜/시간 → 고정 형식
    DateTime,
    /// 부동소수점 수 → 고정 형식
    Decimal,
    /// `<인덱스> <단어>` → 단어의 해당 위치 문자
    CharIndexLookup,
}

impl ConversionRule {
    /// 우선순위 순서. 먼저 맞는 규칙이 이깁니다.
    pub const ALL: [ConversionRule; 3] = [
        ConversionRule::DateTime,
        ConversionRule::Decimal,
        ConversionRule::CharIndexLookup,
    ];

    /// 규칙 적용 시도
    ///
    /// 규칙이 맞으면 변환된 문자열을, 아니면 `None`을 반환합니다.
    pub fn try_convert(self, line: &str, culture: &Culture) -> Option<String> {
        match self {
            ConversionRule::DateTime => culture
                .parse_date_time(line)
                .map(|dt| format_date_time(&dt)),
            ConversionRule::Decimal => culture.parse_number(line).map(format_number),
            ConversionRule::CharIndexLookup => char_at_index(line),
        }
    }
}

impl fmt::Display for ConversionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionRule::DateTime => write!(f, "DateTime"),
            ConversionRule::Decimal => write!(f, "Decimal"),
            ConversionRule::CharIndexLookup => write!(f, "CharIndexLookup"),
        }
    }
}

/// `<i> <word>` 형식에서 `word`의 `i`번째 문자 추출
///
/// 공백 문자 하나하나를 구분자로 취급하므로, 연속된 공백은 빈 토큰을 만듭니다.
fn char_at_index(line: &str) -> Option<String> {
    let mut tokens = line.split(char::is_whitespace);
    let index: i32 = tokens.next()?.parse().ok()?;
    let word = tokens.next()?;
    let index = usize::try_from(index).ok()?;
    word.chars().nth(index).map(String::from)
}

/// 한 줄을 변환하고 적용된 규칙도 함께 반환
pub fn classify(line: &str, culture: &Culture) -> Result<(ConversionRule, String), FormatError> {
    ConversionRule::ALL
        .iter()
        .find_map(|rule| rule.try_convert(line, culture).map(|text| (*rule, text)))
        .ok_or_else(|| FormatError {
            line: line.to_string(),
        })
}

/// 한 줄 변환
///
/// # Examples
/// ```
/// use lineconv::classifier::convert_line;
/// use lineconv::culture::Culture;
///
/// let culture = Culture::invariant();
/// assert_eq!(convert_line("2 hello", &culture).unwrap(), "l");
/// assert!(convert_line("hello", &culture).is_err());
/// ```
pub fn convert_line(line: &str, culture: &Culture) -> Result<String, FormatError> {
    classify(line, culture).map(|(_, text)| text)
}
