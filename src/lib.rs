//! jcount - JSONL CATEGORY COUNTER
//!
//! JSONL (JSON Lines) 파일에서 `category` 필드 값을 추출하여
//! 고유값 목록과 빈도 집계를 출력하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📄 **라인 단위 파싱**: 각 줄을 독립적인 JSON 값으로 파싱
//! - 🛡️ **부분 실패 허용**: 잘못된 JSON 라인은 경고 후 건너뛰고 계속 진행
//! - 📊 **빈도 집계**: category 값별 출현 횟수를 내림차순으로 표시 (동률은 최초 등장 순)
//! - 🔢 **전체 순서 정의**: JSON 값 타입에 대한 명시적 전체 순서로 혼합 타입도 안정 정렬
//! - 💬 **대화형 폴백**: 경로 인자 생략 시 프롬프트, 빈 입력이면 기본 파일명 사용
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력 (파이프 시 자동 비활성화)
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! jcount responses.jsonl
//!
//! # 인자 생략 시 대화형 프롬프트
//! jcount
//! ```

pub mod category;
pub mod cli;
pub mod error;
pub mod extractor;
pub mod stats;

// Re-exports for convenient access
pub use category::{compare_values, CategoryValue};
pub use cli::{resolve_input_path, resolve_prompt_response, Args, DEFAULT_INPUT_FILE};
pub use error::{JCountError, Result};
pub use extractor::{extract_categories, ExtractResult, LineWarning, CATEGORY_KEY};
pub use stats::CategoryCounts;
