//! 통합 테스트 모듈
//!
//! lineconv의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 테스트용 입력 파일 생성 헬퍼
fn create_text_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 출력 파일 내용을 줄 단위로 읽기
fn read_output(path: &Path) -> Vec<String> {
    fs::read_to_string(lineconv::processor::output_path(path))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

mod classifier_tests {
    use lineconv::{classify, convert_line, ConversionRule, Culture};

    #[test]
    fn test_priority_date_before_number() {
        let culture = Culture::lookup("de-DE").unwrap();
        // 점으로 구분된 날짜는 숫자로 해석되지 않음
        let (rule, text) = classify("01.02.2003", &culture).unwrap();
        assert_eq!(rule, ConversionRule::DateTime);
        assert_eq!(text, "02/01/2003 00:00:00");
    }

    #[test]
    fn test_char_lookup_requires_two_tokens() {
        let culture = Culture::invariant();
        assert!(convert_line("abc", &culture).is_err());
        assert!(convert_line("0", &culture).is_ok()); // 숫자로 해석
        assert_eq!(convert_line("0 a", &culture).unwrap(), "a");
    }

    #[test]
    fn test_invariant_fixed_point() {
        let en = Culture::lookup("en-US").unwrap();
        let invariant = Culture::invariant();
        for line in ["12/25/2020 8:30 PM", "1,000,000.25", "1e-7"] {
            let once = convert_line(line, &en).unwrap();
            assert_eq!(convert_line(&once, &invariant).unwrap(), once);
        }
    }
}

mod processor_tests {
    use super::*;
    use lineconv::processor::{output_path, process_file};
    use lineconv::{Culture, LineConvError, Settings};

    #[test]
    fn test_end_to_end_default_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_text_file(temp_dir.path(), "text.txt", "2020-01-01\n3.14\n1 abc\n\n");

        let outcome = process_file(&path, &Settings::default());

        assert!(outcome.is_success());
        assert_eq!(
            read_output(&path),
            vec!["19 01/01/2020 00:00:00", "4 3.14", "1 b", "1 3"]
        );
    }

    #[test]
    fn test_blank_lines_are_not_counted() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_text_file(temp_dir.path(), "in.txt", "1 ab\n\n2 abc\n0 z\n");

        let outcome = process_file(&path, &Settings::default());

        assert_eq!(outcome.lines.len(), 4);
        assert_eq!(read_output(&path).last().map(String::as_str), Some("1 3"));
    }

    #[test]
    fn test_unclassifiable_line_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_text_file(temp_dir.path(), "bad.txt", "3.14\nnot a shape\n");

        let outcome = process_file(&path, &Settings::default());

        assert!(!outcome.is_success());
        assert!(matches!(
            outcome.errors.as_slice(),
            [LineConvError::MalformedLine { line_number: 2, .. }]
        ));
        assert!(!output_path(&path).exists());
        assert!(outcome.output.is_none());
    }

    #[test]
    fn test_verbose_settings_do_not_change_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_text_file(temp_dir.path(), "in.txt", "2,75\n");
        let settings = Settings::default()
            .with_culture(Culture::lookup("fr-FR").unwrap())
            .with_verbose(true);

        let outcome = process_file(&path, &settings);

        assert!(outcome.is_success());
        assert_eq!(read_output(&path), vec!["4 2.75", "1 1"]);
    }
}

mod batch_tests {
    use super::*;
    use lineconv::processor::output_path;
    use lineconv::{run_all, BatchOptions, LineConvError, Settings, Statistics};

    #[test]
    fn test_missing_and_good() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let good = create_text_file(temp_dir.path(), "good.txt", "3.14\n");

        let files = vec![missing.clone(), good.clone()];
        let stats = Statistics::new(files.len());
        let report = run_all(&files, &Settings::default(), BatchOptions::default(), &stats);

        assert!(output_path(&good).exists());
        assert_eq!(report.error_count(), 1);
        assert!(matches!(
            report.outcomes[0].errors.as_slice(),
            [LineConvError::FileNotFound { path }] if path == &missing
        ));
    }

    #[test]
    fn test_malformed_and_good() {
        let temp_dir = TempDir::new().unwrap();
        let bad = create_text_file(temp_dir.path(), "bad.txt", "0 ok\n5 no\n");
        let good = create_text_file(temp_dir.path(), "good.txt", "0 ok\n");

        let files = vec![bad.clone(), good.clone()];
        let stats = Statistics::new(files.len());
        let report = run_all(&files, &Settings::default(), BatchOptions::default(), &stats);

        assert_eq!(report.failed_files(), vec![bad.as_path()]);
        assert!(!output_path(&bad).exists());
        assert_eq!(read_output(&good), vec!["1 o", "1 1"]);
        assert_eq!(stats.get_success_count(), 1);
        assert_eq!(stats.get_error_count(), 1);
    }

    #[test]
    fn test_many_files_run_to_completion() {
        let temp_dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..32)
            .map(|i| {
                let content = if i % 4 == 0 { "junk\n".to_string() } else { format!("{i}\n") };
                create_text_file(temp_dir.path(), &format!("f{i}.txt"), &content)
            })
            .collect();

        let stats = Statistics::new(files.len());
        let report = run_all(&files, &Settings::default(), BatchOptions::default(), &stats);

        assert_eq!(report.outcomes.len(), 32);
        assert_eq!(report.failed_files().len(), 8);
        for (i, path) in files.iter().enumerate() {
            assert_eq!(output_path(path).exists(), i % 4 != 0);
        }
    }
}

mod settings_tests {
    use super::*;
    use lineconv::{LineConvError, Settings};

    #[test]
    fn test_settings_file_drives_culture() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_text_file(
            temp_dir.path(),
            "settings.json",
            r#"{"SourceCultureName": "de-DE", "Verbose": false}"#,
        );

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.culture.name(), "de-DE");
    }

    #[test]
    fn test_unknown_culture_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_text_file(
            temp_dir.path(),
            "settings.json",
            r#"{"SourceCultureName": "nowhere"}"#,
        );

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, LineConvError::ConfigLoad { .. }));
        assert!(err.to_string().contains("설정 파일을 읽을 수 없습니다"));
    }
}

mod pattern_tests {
    use super::*;
    use lineconv::expand_inputs;

    #[test]
    fn test_glob_then_missing_literal() {
        let temp_dir = TempDir::new().unwrap();
        create_text_file(temp_dir.path(), "data1.txt", "1");
        create_text_file(temp_dir.path(), "data2.txt", "2");

        let pattern = temp_dir.path().join("data*.txt").display().to_string();
        let mut files = expand_inputs(&[pattern, "missing.txt".to_string()]);
        let last = files.pop().unwrap();
        files.sort();

        assert_eq!(last, PathBuf::from("missing.txt"));
        assert_eq!(files.len(), 2);
    }
}

mod error_tests {
    use lineconv::LineConvError;
    use std::path::PathBuf;

    #[test]
    fn test_malformed_line_display() {
        let error = LineConvError::MalformedLine {
            file: PathBuf::from("in.txt"),
            line_number: 7,
            content: "??".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("in.txt:7"));
        assert!(msg.contains("\"??\""));
    }

    #[test]
    fn test_file_not_found_display() {
        let error = LineConvError::FileNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert!(error.to_string().contains("missing.txt"));
    }
}
