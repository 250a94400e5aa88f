//! 에러 타입 정의 모듈
//!
//! jcount에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Display 문자열은 사용자에게 그대로 노출되는 영문 메시지 본문이며,
//! `Error:` / `Warning:` 접두사는 출력하는 쪽에서 붙입니다.

use std::path::PathBuf;
use thiserror::Error;

/// jcount에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum JCountError {
    /// 입력 파일이 존재하지 않음
    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    /// 입력 파일 열기 실패 (권한 문제, 디렉토리 등)
    #[error("Could not open file '{}': {reason}", .path.display())]
    FileOpen { path: PathBuf, reason: String },

    /// 파일 읽기 도중 I/O 실패 (UTF-8 오류 포함)
    #[error("Could not read line {line} of '{}': {reason}", .path.display())]
    LineRead {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// 대화형 프롬프트의 표준 입출력 실패
    #[error("Could not read from stdin: {reason}")]
    PromptRead { reason: String },
}

/// jcount 결과 타입 별칭
pub type Result<T> = std::result::Result<T, JCountError>;
