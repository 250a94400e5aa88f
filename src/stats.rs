//! 집계 및 요약 출력 모듈
//!
//! category 값의 고유값 집합과 빈도 집계, 요약 출력을 담당합니다.

use colored::Colorize;
use serde_json::Value;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::category::CategoryValue;

/// 값 하나에 대한 집계 항목
#[derive(Debug)]
struct CountEntry {
    /// 출현 횟수
    count: usize,
    /// 최초 등장 순번 (동률 시 안정적 정렬용)
    first_seen: usize,
}

/// category 빈도 집계 구조체
///
/// 키는 전체 순서 기준으로 정렬된 상태로 유지되므로 고유값 목록은 항상
/// 오름차순으로 순회됩니다.
///
/// # Examples
/// ```
/// use jcount::stats::CategoryCounts;
/// use serde_json::json;
///
/// let counts = CategoryCounts::from_values(vec![
///     json!("food"),
///     json!("travel"),
///     json!("food"),
/// ]);
///
/// assert_eq!(counts.total_entries(), 3);
/// assert_eq!(counts.unique_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CategoryCounts {
    /// 전체 항목 수 (category 필드를 가진 레코드 수)
    total: usize,
    /// 값별 집계 (전체 순서 기준 오름차순 키)
    entries: BTreeMap<CategoryValue, CountEntry>,
}

impl CategoryCounts {
    /// category 값 목록으로부터 집계 생성
    ///
    /// 값의 소유권을 가져와 복제 없이 키로 사용합니다. 입력 순서는
    /// 최초 등장 순번으로 기록되어 동률 정렬에 쓰입니다.
    pub fn from_values(values: Vec<Value>) -> Self {
        let total = values.len();
        let mut entries: BTreeMap<CategoryValue, CountEntry> = BTreeMap::new();

        for (index, value) in values.into_iter().enumerate() {
            let entry = entries
                .entry(CategoryValue(value))
                .or_insert_with(|| CountEntry {
                    count: 0,
                    first_seen: index,
                });
            entry.count += 1;
        }

        Self { total, entries }
    }

    /// 전체 항목 수 반환
    pub fn total_entries(&self) -> usize {
        self.total
    }

    /// 고유 category 수 반환
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// 집계가 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// 고유 category 값을 오름차순으로 반환
    pub fn unique_sorted(&self) -> Vec<&CategoryValue> {
        self.entries.keys().collect()
    }

    /// (값, 횟수) 쌍을 빈도 내림차순으로 반환
    ///
    /// 횟수가 같으면 파일에서 먼저 등장한 값이 앞에 옵니다.
    pub fn most_common(&self) -> Vec<(&CategoryValue, usize)> {
        let mut pairs: Vec<_> = self.entries.iter().collect();
        pairs.sort_by_key(|(_, entry)| (Reverse(entry.count), entry.first_seen));
        pairs
            .into_iter()
            .map(|(value, entry)| (value, entry.count))
            .collect()
    }

    /// 요약 출력
    ///
    /// 고유 category 목록(오름차순), 전체/고유 개수, 빈도 내림차순 집계를
    /// 차례로 출력합니다.
    pub fn print_summary(&self) {
        println!("{}", "Unique categories:".bright_white().bold());
        for value in self.unique_sorted() {
            println!("- {}", value);
        }

        println!();
        println!("Total entries: {}", self.total_entries().to_string().bright_green());
        println!("Unique categories: {}", self.unique_count().to_string().bright_green());

        println!();
        println!("{}", "Category counts:".bright_white().bold());
        for (value, count) in self.most_common() {
            println!("{}: {}", value, count.to_string().green());
        }
    }
}
