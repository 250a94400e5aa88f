//! CLI 인자 파싱 및 입력 경로 결정 모듈
//!
//! clap을 사용한 명령줄 인자 정의와 입력 파일 경로 결정을 담당합니다.
//! 경로 결정 우선순위: 명령행 인자 > 대화형 프롬프트 입력 > 기본 파일명

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{JCountError, Result};

/// 기본 입력 파일명 (인자와 프롬프트 입력이 모두 비어 있을 때 사용)
pub const DEFAULT_INPUT_FILE: &str = "wyr_two_responses.jsonl";

/// 대화형 프롬프트 문구 (개행 없이 출력됨)
pub const PATH_PROMPT: &str = "Enter the path to your JSONL file: ";

/// jcount CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jcount",
    author = "YourName <your@email.com>",
    version,
    about = "JSONL CATEGORY COUNTER - JSONL 파일에서 category 필드 값을 추출하고 빈도를 집계하는 CLI 도구",
    long_about = r#"
JSONL CATEGORY COUNTER
======================

JSONL (JSON Lines) 파일을 한 줄씩 읽어 각 레코드의 category 필드 값을
추출하고, 고유값 목록과 값별 출현 빈도를 출력합니다.

특징:
  • 라인 단위 독립 파싱으로 부분 실패 허용
  • 잘못된 JSON 라인은 경고 후 건너뛰고 계속 진행
  • 고유 category 목록은 오름차순, 빈도는 내림차순으로 표시
  • 경로 인자 생략 시 대화형 프롬프트 (빈 입력이면 기본 파일명 사용)

예제:
  jcount responses.jsonl
  jcount
"#
)]
pub struct Args {
    /// 처리할 JSONL 파일 경로 (생략 시 대화형 프롬프트로 질의)
    pub path: Option<PathBuf>,
}

/// 입력 파일 경로 결정
///
/// 우선순위:
/// 1. 명령행 인자로 주어진 경로
/// 2. 대화형 프롬프트 입력 (공백 제거 후)
/// 3. 기본 파일명 [`DEFAULT_INPUT_FILE`]
pub fn resolve_input_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }

    let response = read_prompt_response()?;
    Ok(resolve_prompt_response(&response))
}

/// 프롬프트 응답 문자열을 경로로 변환
///
/// 앞뒤 공백을 제거하고, 빈 응답이면 기본 파일명으로 대체합니다.
///
/// # Examples
/// ```
/// use jcount::cli::{resolve_prompt_response, DEFAULT_INPUT_FILE};
/// use std::path::PathBuf;
///
/// assert_eq!(
///     resolve_prompt_response("  data.jsonl  \n"),
///     PathBuf::from("data.jsonl")
/// );
/// assert_eq!(
///     resolve_prompt_response("\n"),
///     PathBuf::from(DEFAULT_INPUT_FILE)
/// );
/// ```
pub fn resolve_prompt_response(response: &str) -> PathBuf {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        PathBuf::from(DEFAULT_INPUT_FILE)
    } else {
        PathBuf::from(trimmed)
    }
}

/// 표준 입력에서 프롬프트 응답 한 줄을 읽음
///
/// 프롬프트 문구는 개행 없이 표준 출력에 쓰고 플러시합니다.
/// EOF(입력 없음)는 빈 응답으로 취급됩니다.
fn read_prompt_response() -> Result<String> {
    print!("{}", PATH_PROMPT);
    io::stdout()
        .flush()
        .map_err(|e| JCountError::PromptRead {
            reason: e.to_string(),
        })?;

    let mut response = String::new();
    io::stdin()
        .read_line(&mut response)
        .map_err(|e| JCountError::PromptRead {
            reason: e.to_string(),
        })?;

    Ok(response)
}
