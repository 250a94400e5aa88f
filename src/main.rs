//! jcount - JSONL CATEGORY COUNTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use jcount::{
    cli::{resolve_input_path, Args},
    extractor::{extract_categories, ExtractResult},
    stats::CategoryCounts,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 입력 경로 결정 (인자 > 프롬프트 > 기본 파일명)
    let path = resolve_input_path(args.path).context("failed to resolve input path")?;

    // 헤더 출력
    print_header(&path);

    // category 값 추출
    let result = extract_categories(&path);
    print_diagnostics(&result);

    if result.categories.is_empty() {
        println!(
            "{}",
            "No categories found or file could not be processed.".yellow()
        );
        return Ok(());
    }

    // 집계 및 요약 출력
    let counts = CategoryCounts::from_values(result.categories);
    counts.print_summary();

    Ok(())
}

/// 처리 대상 파일 헤더 출력
fn print_header(path: &Path) {
    println!("Processing file: {}", path.display().to_string().cyan());
    println!("{}", "-".repeat(50));
}

/// 파일 수준 에러와 라인 경고 출력
///
/// 모든 진단은 표준 출력으로 나가며, 요약보다 먼저 표시됩니다.
fn print_diagnostics(result: &ExtractResult) {
    if let Some(error) = &result.error {
        println!("{}", format!("Error: {}", error).red());
    }

    for warning in &result.warnings {
        println!("{}", format!("Warning: {}", warning).yellow());
    }
}
