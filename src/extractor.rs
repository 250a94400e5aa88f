//! JSONL 라인 처리 모듈
//!
//! 파일을 한 줄씩 읽어 독립적인 JSON 값으로 파싱하고, category 필드 값을
//! 파일 등장 순서대로 수집합니다. 개별 라인의 파싱 실패는 경고로 기록하고
//! 계속 진행하며, 파일 수준 오류는 결과에 담아 호출자가 우아하게 처리할 수
//! 있게 합니다.

use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::JCountError;

/// 추출 대상 필드 이름
pub const CATEGORY_KEY: &str = "category";

/// 개별 라인 JSON 파싱 실패 경고
#[derive(Debug, Clone)]
pub struct LineWarning {
    /// 1-기반 라인 번호
    pub line: usize,
    /// serde_json이 보고한 실패 사유
    pub reason: String,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid JSON on line {}", self.line)
    }
}

/// 단일 JSONL 파일 추출 결과
#[derive(Debug)]
pub struct ExtractResult {
    /// 처리한 파일 경로
    pub path: PathBuf,
    /// 추출된 category 값 목록 (파일 내 등장 순서, 중복 유지)
    pub categories: Vec<Value>,
    /// 파싱에 실패한 라인 경고 목록
    pub warnings: Vec<LineWarning>,
    /// 파일 수준 에러 (파일 없음, 열기 실패, 읽기 실패)
    pub error: Option<JCountError>,
}

impl ExtractResult {
    /// 빈 결과 생성
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            categories: Vec::new(),
            warnings: Vec::new(),
            error: None,
        }
    }

    /// 파일 수준 에러 결과 생성
    fn file_error(path: &Path, error: JCountError) -> Self {
        Self {
            error: Some(error),
            ..Self::new(path)
        }
    }
}

/// 라인 단위 처리 결과
#[derive(Debug)]
enum LineOutcome {
    /// category 값 발견
    Category(Value),
    /// 빈 줄, 매핑이 아닌 값, 또는 category 키 없는 매핑
    Skip,
    /// JSON 파싱 실패
    Invalid(String),
}

/// JSONL 파일에서 category 값 추출
///
/// # Arguments
/// * `path` - 처리할 JSONL 파일 경로
///
/// # Returns
/// category 값 목록과 라인 경고, 파일 수준 에러를 담은 `ExtractResult`.
/// 파일이 없거나 열 수 없으면 에러가 기록된 빈 결과를 반환하며, 호출자는
/// 이를 "category 없음"으로 취급합니다.
pub fn extract_categories(path: &Path) -> ExtractResult {
    if !path.exists() {
        return ExtractResult::file_error(
            path,
            JCountError::FileNotFound {
                path: path.to_path_buf(),
            },
        );
    }

    // 디렉토리는 open이 성공한 뒤 첫 read에서야 실패할 수 있으므로 열기 전에 가려낸다
    if path.is_dir() {
        return ExtractResult::file_error(
            path,
            JCountError::FileOpen {
                path: path.to_path_buf(),
                reason: "is a directory".to_string(),
            },
        );
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return ExtractResult::file_error(
                path,
                JCountError::FileOpen {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            )
        }
    };

    let mut result = ExtractResult::new(path);
    let reader = BufReader::new(file);

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                // 읽기 실패 지점까지 수집한 값은 유지
                result.error = Some(JCountError::LineRead {
                    path: path.to_path_buf(),
                    line: line_number,
                    reason: e.to_string(),
                });
                break;
            }
        };

        match parse_line(&line) {
            LineOutcome::Category(value) => result.categories.push(value),
            LineOutcome::Skip => {}
            LineOutcome::Invalid(reason) => result.warnings.push(LineWarning {
                line: line_number,
                reason,
            }),
        }
    }

    result
}

/// 한 줄을 파싱하여 처리 방법을 분류
///
/// 앞뒤 공백을 제거한 뒤 JSON 값 하나로 파싱합니다. 빈 줄과 매핑이 아닌
/// 값(숫자, 배열 등)은 "category 키 없음"으로 취급하여 경고 없이
/// 건너뜁니다. 경고는 JSON 디코드 실패에만 해당합니다.
fn parse_line(line: &str) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineOutcome::Skip;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(mut map)) => match map.remove(CATEGORY_KEY) {
            Some(value) => LineOutcome::Category(value),
            None => LineOutcome::Skip,
        },
        Ok(_) => LineOutcome::Skip,
        Err(e) => LineOutcome::Invalid(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn create_jsonl(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_line_with_category() {
        match parse_line(r#"{"category": "food"}"#) {
            LineOutcome::Category(value) => assert_eq!(value, json!("food")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_without_category() {
        assert!(matches!(parse_line(r#"{"other": 1}"#), LineOutcome::Skip));
    }

    #[test]
    fn test_parse_line_blank_is_skipped() {
        assert!(matches!(parse_line(""), LineOutcome::Skip));
        assert!(matches!(parse_line("   \t  "), LineOutcome::Skip));
    }

    #[test]
    fn test_parse_line_non_mapping_is_skipped() {
        assert!(matches!(parse_line("3"), LineOutcome::Skip));
        assert!(matches!(parse_line("[1, 2]"), LineOutcome::Skip));
        assert!(matches!(parse_line(r#""just text""#), LineOutcome::Skip));
        assert!(matches!(parse_line("true"), LineOutcome::Skip));
        assert!(matches!(parse_line("null"), LineOutcome::Skip));
    }

    #[test]
    fn test_parse_line_invalid_json() {
        assert!(matches!(parse_line("not json"), LineOutcome::Invalid(_)));
        assert!(matches!(parse_line("{broken"), LineOutcome::Invalid(_)));
    }

    #[test]
    fn test_parse_line_trims_surrounding_whitespace() {
        match parse_line("  {\"category\": \"travel\"}  ") {
            LineOutcome::Category(value) => assert_eq!(value, json!("travel")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_extract_basic_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl(
            temp_dir.path(),
            "data.jsonl",
            concat!(
                "{\"category\": \"food\"}\n",
                "{\"category\": \"travel\"}\n",
                "{\"category\": \"food\"}\n",
                "not json\n",
                "{\"other\": 1}\n",
            ),
        );

        let result = extract_categories(&path);

        assert_eq!(
            result.categories,
            vec![json!("food"), json!("travel"), json!("food")]
        );
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].line, 4);
        assert!(!result.warnings[0].reason.is_empty());
        assert!(result.error.is_none());
        assert_eq!(result.path, path);
    }

    #[test]
    fn test_extract_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.jsonl");

        let result = extract_categories(&path);

        assert!(result.categories.is_empty());
        assert!(result.warnings.is_empty());
        assert!(matches!(
            result.error,
            Some(JCountError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_extract_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl(temp_dir.path(), "empty.jsonl", "");

        let result = extract_categories(&path);

        assert!(result.categories.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_extract_blank_lines_not_warned() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl(
            temp_dir.path(),
            "blanks.jsonl",
            "\n\n{\"category\": \"a\"}\n\n",
        );

        let result = extract_categories(&path);

        assert_eq!(result.categories, vec![json!("a")]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_extract_preserves_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl(
            temp_dir.path(),
            "order.jsonl",
            "{\"category\": \"z\"}\n{\"category\": \"a\"}\n{\"category\": \"m\"}\n",
        );

        let result = extract_categories(&path);

        assert_eq!(
            result.categories,
            vec![json!("z"), json!("a"), json!("m")]
        );
    }

    #[test]
    fn test_extract_warning_line_numbers_are_one_based() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl(
            temp_dir.path(),
            "broken.jsonl",
            "oops\n{\"category\": \"a\"}\noops again\n",
        );

        let result = extract_categories(&path);

        let lines: Vec<usize> = result.warnings.iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![1, 3]);
        assert_eq!(result.categories.len(), 1);
    }

    #[test]
    fn test_extract_non_string_category_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl(
            temp_dir.path(),
            "typed.jsonl",
            "{\"category\": 7}\n{\"category\": null}\n{\"category\": [1]}\n",
        );

        let result = extract_categories(&path);

        assert_eq!(
            result.categories,
            vec![json!(7), Value::Null, json!([1])]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = LineWarning {
            line: 4,
            reason: "expected value".to_string(),
        };
        assert_eq!(warning.to_string(), "Invalid JSON on line 4");
    }
}
