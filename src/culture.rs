//! 문화권(로케일) 규칙 모듈
//!
//! 입력 줄의 날짜와 숫자를 해석할 때 쓰는 문화권 규칙과,
//! 출력에 쓰는 고정(invariant) 표현을 담당합니다.
//!
//! 문화권은 항상 인자로 전달됩니다. 스레드나 프로세스 전역 상태는 없습니다.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

/// 날짜 구성 요소의 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// 월/일/년
    MonthDayYear,
    /// 일.월.년
    DayMonthYear,
    /// 년/월/일
    YearMonthDay,
}

/// 입력 해석에 쓰이는 문화권 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    name: &'static str,
    decimal_separator: char,
    group_separator: char,
    date_order: DateOrder,
    date_separator: char,
    twelve_hour: bool,
}

/// 지원하지 않는 문화권 이름
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("알 수 없는 문화권입니다: {0:?}")]
pub struct UnknownCultureError(pub String);

const INVARIANT_NAME: &str = "invariant";

const CULTURES: &[Culture] = &[
    Culture {
        name: INVARIANT_NAME,
        decimal_separator: '.',
        group_separator: ',',
        date_order: DateOrder::MonthDayYear,
        date_separator: '/',
        twelve_hour: true,
    },
    Culture {
        name: "en-US",
        decimal_separator: '.',
        group_separator: ',',
        date_order: DateOrder::MonthDayYear,
        date_separator: '/',
        twelve_hour: true,
    },
    Culture {
        name: "en-GB",
        decimal_separator: '.',
        group_separator: ',',
        date_order: DateOrder::DayMonthYear,
        date_separator: '/',
        twelve_hour: false,
    },
    Culture {
        name: "ru-RU",
        decimal_separator: ',',
        group_separator: '\u{a0}',
        date_order: DateOrder::DayMonthYear,
        date_separator: '.',
        twelve_hour: false,
    },
    Culture {
        name: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        date_order: DateOrder::DayMonthYear,
        date_separator: '.',
        twelve_hour: false,
    },
    Culture {
        name: "fr-FR",
        decimal_separator: ',',
        group_separator: '\u{202f}',
        date_order: DateOrder::DayMonthYear,
        date_separator: '/',
        twelve_hour: false,
    },
    Culture {
        name: "ja-JP",
        decimal_separator: '.',
        group_separator: ',',
        date_order: DateOrder::YearMonthDay,
        date_separator: '/',
        twelve_hour: false,
    },
];

/// 모든 문화권에서 허용되는 ISO-8601 날짜+시간 형식
const ISO_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const TIME_SUFFIXES_24H: &[&str] = &[" %H:%M:%S", " %H:%M"];
const TIME_SUFFIXES_12H: &[&str] = &[" %I:%M:%S %p", " %I:%M %p"];

/// 고정 날짜/시간 출력 형식 (MM/dd/yyyy HH:mm:ss)
const INVARIANT_DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

impl Culture {
    /// 문화권 독립적인 기본 규칙
    pub fn invariant() -> Self {
        CULTURES[0]
    }

    /// 이름으로 문화권 찾기
    ///
    /// 대소문자를 구분하지 않으며 `_`를 `-`로 취급합니다.
    /// 빈 문자열과 `"invariant"`는 고정 문화권을 뜻합니다.
    ///
    /// # Examples
    /// ```
    /// use lineconv::culture::Culture;
    ///
    /// assert_eq!(Culture::lookup("ru_ru").unwrap().name(), "ru-RU");
    /// assert!(Culture::lookup("xx-XX").is_none());
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = name.trim().replace('_', "-");
        if wanted.is_empty() {
            return Some(Self::invariant());
        }
        CULTURES
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(&wanted))
    }

    /// 정규화된 문화권 이름
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    fn is_group_separator(&self, c: char) -> bool {
        // 공백 계열 구분자를 쓰는 문화권은 일반 공백도 받아들임
        c == self.group_separator
            || (c == ' ' && matches!(self.group_separator, '\u{a0}' | '\u{202f}'))
    }

    /// 문화권 규칙에 따라 부동소수점 수 해석
    ///
    /// 부호, 자릿수 구분자, 소수 구분자, 지수를 허용합니다.
    /// `NaN`, `Infinity`, `∞`도 받아들입니다.
    pub fn parse_number(&self, text: &str) -> Option<f64> {
        let s = text.trim();
        let (negative, body) = match s.chars().next()? {
            '-' => (true, &s[1..]),
            '+' => (false, &s[1..]),
            _ => (false, s),
        };

        if let Some(special) = parse_special_number(body) {
            return Some(if negative { -special } else { special });
        }

        let mut normalized = String::with_capacity(body.len() + 1);
        if negative {
            normalized.push('-');
        }

        let mut chars = body.chars().peekable();
        let mut int_digits = 0usize;
        let mut frac_digits = 0usize;

        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                normalized.push(c);
                int_digits += 1;
                chars.next();
            } else if int_digits > 0 && self.is_group_separator(c) {
                chars.next();
                // 구분자 뒤에는 반드시 숫자
                if !chars.peek().is_some_and(|d| d.is_ascii_digit()) {
                    return None;
                }
            } else {
                break;
            }
        }

        if chars.peek() == Some(&self.decimal_separator) {
            chars.next();
            normalized.push('.');
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                normalized.push(c);
                frac_digits += 1;
                chars.next();
            }
        }

        if int_digits + frac_digits == 0 {
            return None;
        }

        if matches!(chars.peek(), Some('e' | 'E')) {
            chars.next();
            normalized.push('e');
            if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
                normalized.push(sign);
            }
            let mut exp_digits = 0usize;
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                normalized.push(c);
                exp_digits += 1;
                chars.next();
            }
            if exp_digits == 0 {
                return None;
            }
        }

        if chars.next().is_some() {
            return None;
        }

        normalized.parse().ok()
    }

    /// 문화권 규칙에 따라 날짜/시간 해석
    ///
    /// ISO-8601 형식은 모든 문화권에서 허용되며, 그 밖에 문화권의
    /// 짧은 날짜 형식(선택적 시간 포함)을 받아들입니다.
    /// 날짜만 있는 값은 자정으로 간주합니다.
    pub fn parse_date_time(&self, text: &str) -> Option<NaiveDateTime> {
        let s = text.trim();
        // 숫자 없는 문자열은 날짜가 될 수 없음
        if !s.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }

        if let Some(dt) = ISO_DATE_TIME_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        {
            return Some(dt);
        }

        let date_pattern = self.short_date_pattern();
        let twelve_hour: &[&str] = if self.twelve_hour {
            TIME_SUFFIXES_12H
        } else {
            &[]
        };
        for suffix in TIME_SUFFIXES_24H.iter().chain(twelve_hour) {
            let pattern = format!("{}{}", date_pattern, suffix);
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, &pattern) {
                return Some(dt);
            }
        }

        [ISO_DATE_FORMAT, date_pattern.as_str()]
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    fn short_date_pattern(&self) -> String {
        let sep = self.date_separator;
        match self.date_order {
            DateOrder::MonthDayYear => format!("%m{sep}%d{sep}%Y"),
            DateOrder::DayMonthYear => format!("%d{sep}%m{sep}%Y"),
            DateOrder::YearMonthDay => format!("%Y{sep}%m{sep}%d"),
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<String> for Culture {
    type Error = UnknownCultureError;

    fn try_from(name: String) -> std::result::Result<Self, Self::Error> {
        Culture::lookup(&name).ok_or(UnknownCultureError(name))
    }
}

// 설정 파일에서는 문화권 이름 문자열로 읽음
impl<'de> Deserialize<'de> for Culture {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Culture::try_from(name).map_err(serde::de::Error::custom)
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

fn parse_special_number(body: &str) -> Option<f64> {
    if body.eq_ignore_ascii_case("nan") {
        Some(f64::NAN)
    } else if body.eq_ignore_ascii_case("infinity") || body == "∞" {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// 날짜/시간을 고정 형식으로 출력
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lineconv::culture::format_date_time;
///
/// let dt = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
/// assert_eq!(format_date_time(&dt), "01/02/2020 03:04:05");
/// ```
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(INVARIANT_DATE_TIME_FORMAT).to_string()
}

/// 부동소수점 수를 고정 형식으로 출력
///
/// 왕복 가능한 최단 표현을 쓰며, 10진 지수가 15 이상이거나 -5 이하이면
/// `1.5E+20`, `1E-05` 같은 지수 표기로 바꿉니다.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..15).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", mantissa, sign, exponent.abs())
    }
}
