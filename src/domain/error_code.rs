use std::fmt;

use crate::utils::string_utils::{is_empty_code, lenient_int};

/// JSend error code
///
/// 호출자가 전달한 표현(문자열 또는 정수)을 그대로 보관하고,
/// 직렬화 시점에만 정수로 정규화합니다.
///
/// # 정규화 규칙
///
/// - `Int(n)` → `n`
/// - `Text(s)` → [`lenient_int`] 규칙으로 변환 (`"42"` → 42, `"42abc"` → 42, `"abc"` → 0)
///
/// `Int(0)`, `Text("")`, `Text("0")`은 비어 있는 코드로 취급되어 출력에서 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Int(i64),
    Text(String),
}

impl ErrorCode {
    /// 출력에서 생략되는 "빈" 코드인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        match self {
            ErrorCode::Int(value) => *value == 0,
            ErrorCode::Text(value) => is_empty_code(value),
        }
    }

    /// 직렬화에 사용되는 정수 값
    pub fn to_int(&self) -> i64 {
        match self {
            ErrorCode::Int(value) => *value,
            ErrorCode::Text(value) => lenient_int(value),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Int(value) => write!(f, "{value}"),
            ErrorCode::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(value: i64) -> Self {
        ErrorCode::Int(value)
    }
}

impl From<i32> for ErrorCode {
    fn from(value: i32) -> Self {
        ErrorCode::Int(i64::from(value))
    }
}

impl From<&str> for ErrorCode {
    fn from(value: &str) -> Self {
        ErrorCode::Text(value.to_string())
    }
}

impl From<String> for ErrorCode {
    fn from(value: String) -> Self {
        ErrorCode::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_string_and_int_normalize_equally() {
        assert_eq!(ErrorCode::from("42").to_int(), 42);
        assert_eq!(ErrorCode::from(42).to_int(), 42);
        assert_eq!(ErrorCode::from("  7 apples").to_int(), 7);
        assert_eq!(ErrorCode::from("not-a-number").to_int(), 0);
    }

    #[test]
    fn test_empty_codes() {
        assert!(ErrorCode::from(0).is_empty());
        assert!(ErrorCode::from("").is_empty());
        assert!(ErrorCode::from("0").is_empty());
        assert!(!ErrorCode::from(-1).is_empty());
        assert!(!ErrorCode::from("E_TIMEOUT").is_empty());
    }

    #[test]
    fn test_representation_is_preserved() {
        assert_eq!(ErrorCode::from("42"), ErrorCode::Text("42".to_string()));
        assert_eq!(ErrorCode::from("42").to_string(), "42");
        assert_ne!(ErrorCode::from("42"), ErrorCode::from(42));
    }
}
