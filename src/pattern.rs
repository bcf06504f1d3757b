//! 입력 패턴 확장 모듈
//!
//! 명령줄 인자 중 glob 패턴을 실제 파일 경로로 확장합니다.

use glob::glob;
use std::path::PathBuf;

/// 인자가 glob 메타 문자를 포함하는지 확인
pub fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// 입력 인자를 파일 경로 목록으로 확장
///
/// 일반 경로는 그대로 두고, glob 패턴은 일치하는 경로들로 바꿉니다.
/// 일치하는 파일이 없거나 잘못된 패턴은 그대로 남겨
/// 이후 "파일을 찾을 수 없음"으로 보고되게 합니다.
///
/// # Arguments
/// * `args` - 명령줄에서 받은 입력 인자
///
/// # Returns
/// 인자 순서를 유지한 파일 경로 목록
///
/// # Examples
/// ```
/// use lineconv::pattern::expand_inputs;
/// use std::path::PathBuf;
///
/// let files = expand_inputs(&["plain.txt".to_string()]);
/// assert_eq!(files, vec![PathBuf::from("plain.txt")]);
/// ```
pub fn expand_inputs(args: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::with_capacity(args.len());

    for arg in args {
        if !is_pattern(arg) {
            files.push(PathBuf::from(arg));
            continue;
        }

        let matched: Vec<PathBuf> = match glob(arg) {
            Ok(paths) => paths
                .filter_map(|p| p.ok())
                .filter(|p| p.is_file())
                .collect(),
            Err(e) => {
                log::warn!("유효하지 않은 패턴 {}: {}", arg, e);
                Vec::new()
            }
        };

        if matched.is_empty() {
            files.push(PathBuf::from(arg));
        } else {
            files.extend(matched);
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("*.txt"));
        assert!(is_pattern("data?.txt"));
        assert!(is_pattern("file[0-9].txt"));
        assert!(!is_pattern("text.txt"));
    }

    #[test]
    fn test_expand_star() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.log"] {
            fs::write(temp_dir.path().join(name), "1").unwrap();
        }

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let mut files = expand_inputs(&[pattern]);
        files.sort();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_unmatched_pattern_kept_literally() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir.path().join("*.none").display().to_string();

        assert_eq!(expand_inputs(&[pattern.clone()]), vec![PathBuf::from(pattern)]);
    }

    #[test]
    fn test_invalid_pattern_kept_literally() {
        let files = expand_inputs(&["[invalid".to_string()]);
        assert_eq!(files, vec![PathBuf::from("[invalid")]);
    }

    #[test]
    fn test_mixed_arguments_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("x1.txt"), "1").unwrap();

        let pattern = temp_dir.path().join("x?.txt").display().to_string();
        let files = expand_inputs(&["first.txt".to_string(), pattern, "last.txt".to_string()]);

        assert_eq!(
            files,
            vec![
                PathBuf::from("first.txt"),
                temp_dir.path().join("x1.txt"),
                PathBuf::from("last.txt")
            ]
        );
    }
}
