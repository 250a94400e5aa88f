//! category 값 타입 모듈
//!
//! `serde_json::Value`에 대한 전체 순서(total order)와 표시 형식을 정의합니다.
//! JSON 값은 타입 순위(null < bool < number < string < array < object)를
//! 먼저 비교하고, 같은 타입끼리는 값 기준으로 비교하므로 어떤 두 값이든
//! 항상 정렬·비교가 가능합니다.

use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::fmt;

/// 전체 순서가 정의된 category 값 래퍼
///
/// `serde_json::Value`는 `Ord`를 구현하지 않으므로, 정렬과 집합 연산이
/// 필요한 곳에서는 이 래퍼를 사용합니다. 동등성은 비교 결과에서 파생되며
/// (`cmp == Equal`), 그 결과 `1`과 `1.0`처럼 수치가 같은 숫자는 하나의
/// category로 취급됩니다.
#[derive(Debug, Clone)]
pub struct CategoryValue(pub Value);

impl From<Value> for CategoryValue {
    fn from(value: Value) -> Self {
        CategoryValue(value)
    }
}

impl PartialEq for CategoryValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryValue {}

impl PartialOrd for CategoryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CategoryValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_values(&self.0, &other.0)
    }
}

impl fmt::Display for CategoryValue {
    /// 문자열은 따옴표 없이, 그 외 타입은 압축 JSON 표기로 렌더링
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// 두 JSON 값을 전체 순서 기준으로 비교
///
/// 타입이 다르면 타입 순위로, 같으면 값으로 비교합니다.
///
/// # Examples
/// ```
/// use jcount::category::compare_values;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_values(&json!(null), &json!("a")), Ordering::Less);
/// assert_eq!(compare_values(&json!("apple"), &json!("banana")), Ordering::Less);
/// assert_eq!(compare_values(&json!(2), &json!(1.5)), Ordering::Greater);
/// ```
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => compare_arrays(x, y),
        (Value::Object(x), Value::Object(y)) => compare_objects(x, y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// JSON 타입 순위: null < bool < number < string < array < object
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// 숫자 비교: 정수끼리는 손실 없이, 정수 ↔ 부동소수점도 정밀도 손실 없이
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    // 음의 정수 vs i64 범위를 넘는 양의 정수
    if a.as_i64().map(|x| x < 0).unwrap_or(false) && b.as_u64().is_some() {
        return Ordering::Less;
    }
    if a.as_u64().is_some() && b.as_i64().map(|y| y < 0).unwrap_or(false) {
        return Ordering::Greater;
    }

    // 여기부터는 한쪽 이상이 부동소수점. 2^53을 넘는 정수는 f64 캐스팅에서
    // 정밀도를 잃으므로, 정수 ↔ 부동소수점은 f64의 정수부를 잘라 비교한다
    if !a.is_f64() {
        if let Some(f) = b.as_f64() {
            return compare_integer_with_f64(a, f);
        }
    }
    if !b.is_f64() {
        if let Some(f) = a.as_f64() {
            return compare_integer_with_f64(b, f).reverse();
        }
    }

    // 둘 다 부동소수점. serde_json::Number는 NaN을 표현하지 않으므로
    // partial_cmp는 항상 Some
    let x = a.as_f64().unwrap_or(0.0);
    let y = b.as_f64().unwrap_or(0.0);
    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
}

/// 정수 표현(i64/u64) 숫자와 유한 f64의 정확한 비교
fn compare_integer_with_f64(n: &Number, f: f64) -> Ordering {
    if let Some(x) = n.as_i64() {
        compare_i64_with_f64(x, f)
    } else if let Some(x) = n.as_u64() {
        compare_u64_with_f64(x, f)
    } else {
        Ordering::Equal
    }
}

/// i64 ↔ 유한 f64 비교
///
/// |f|가 2^63 범위 밖이면 범위만으로 판정하고, 안이면 f의 정수부를 i64로
/// 잘라(이 범위의 정수형 f64는 i64로 손실 없이 변환됨) 비교한 뒤 소수부로
/// 동률을 가릅니다.
fn compare_i64_with_f64(x: i64, f: f64) -> Ordering {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    if f >= TWO_POW_63 {
        return Ordering::Less;
    }
    let integral = f.trunc();
    match x.cmp(&(integral as i64)) {
        Ordering::Equal if f > integral => Ordering::Less,
        Ordering::Equal if f < integral => Ordering::Greater,
        other => other,
    }
}

/// u64 ↔ 유한 f64 비교 (i64 범위를 넘는 양의 정수 전용)
fn compare_u64_with_f64(x: u64, f: f64) -> Ordering {
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
    if f < 0.0 {
        return Ordering::Greater;
    }
    if f >= TWO_POW_64 {
        return Ordering::Less;
    }
    let integral = f.trunc();
    match x.cmp(&(integral as u64)) {
        // f >= 0이므로 trunc 후 f < integral은 불가능
        Ordering::Equal if f > integral => Ordering::Less,
        other => other,
    }
}

/// 배열 비교: 요소 단위 사전식, 공통 구간이 같으면 길이 순
fn compare_arrays(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let order = compare_values(x, y);
        if order != Ordering::Equal {
            return order;
        }
    }
    a.len().cmp(&b.len())
}

/// 객체 비교: 키 오름차순 (key, value) 쌍의 사전식, 그 다음 길이 순
///
/// `serde_json::Map`은 기본적으로 키 오름차순으로 순회하므로 비교 결과는
/// 삽입 순서와 무관하게 결정적입니다.
fn compare_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        let key_order = ka.cmp(kb);
        if key_order != Ordering::Equal {
            return key_order;
        }
        let value_order = compare_values(va, vb);
        if value_order != Ordering::Equal {
            return value_order;
        }
    }
    a.len().cmp(&b.len())
}
