//! # 문자열 유틸리티
//!
//! JSend 필드 값 정규화에 쓰이는 문자열 처리 함수들입니다.
//! error code는 문자열로도 전달될 수 있으므로, 출력 시점에 관대한(lenient)
//! 정수 변환 규칙을 적용합니다.

/// 관대한 문자열 → 정수 변환
///
/// 엄격한 숫자 검증 대신, 다음 규칙으로 문자열의 앞부분만 읽어 정수를 만듭니다.
///
/// 1. 앞쪽 공백(스페이스, 탭, 개행, 수직 탭, 폼 피드)을 건너뜁니다.
/// 2. 부호, 정수부, 선택적 소수부, 선택적 지수부로 이루어진 가장 긴 숫자 접두사를 읽습니다.
/// 3. 소수/지수가 있으면 0 방향으로 버림합니다.
/// 4. 범위를 벗어나면 `i64::MIN`/`i64::MAX`로 포화시키고, 무한대는 0입니다.
/// 5. 숫자 접두사가 없으면 0을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use jsend_response::utils::string_utils::lenient_int;
///
/// assert_eq!(lenient_int("42"), 42);
/// assert_eq!(lenient_int("  42abc"), 42);
/// assert_eq!(lenient_int("4.9"), 4);
/// assert_eq!(lenient_int("1e3"), 1000);
/// assert_eq!(lenient_int("abc"), 0);
/// ```
pub fn lenient_int(value: &str) -> i64 {
    let trimmed = value.trim_start_matches([' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}']);
    let bytes = trimmed.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let has_int_digits = end > int_start;
    let mut is_float = false;

    if end < len && bytes[end] == b'.' {
        let frac_end = skip_digits(bytes, end + 1);
        if has_int_digits || frac_end > end + 1 {
            is_float = true;
            end = frac_end;
        }
    }

    if !has_int_digits && !is_float {
        return 0;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            is_float = true;
            end = exp_end;
        }
    }

    let numeric = &trimmed[..end];

    if is_float {
        return match numeric.parse::<f64>() {
            Ok(number) if number.is_finite() => number.trunc() as i64,
            _ => 0,
        };
    }

    numeric.parse::<i64>().unwrap_or_else(|_| {
        // 부호와 숫자만 남았으므로 실패 원인은 오버플로뿐
        if numeric.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// error code 문자열이 "비어 있는" 값인지 확인
///
/// 빈 문자열과 `"0"`은 코드가 없는 것으로 취급되어 출력에서 생략됩니다.
pub fn is_empty_code(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// 문자열이 비어 있지 않은지 확인
///
/// 공백만 있는 문자열도 유효한 값으로 취급합니다. error 메시지는 길이만 검사합니다.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int_plain_numbers() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int("-17"), -17);
        assert_eq!(lenient_int("+8"), 8);
        assert_eq!(lenient_int("007"), 7);
    }

    #[test]
    fn test_lenient_int_prefix_and_whitespace() {
        assert_eq!(lenient_int("  42"), 42);
        assert_eq!(lenient_int("\n\t42"), 42);
        assert_eq!(lenient_int("42abc"), 42);
        assert_eq!(lenient_int("12 34"), 12);
        assert_eq!(lenient_int("42 "), 42);
    }

    #[test]
    fn test_lenient_int_non_numeric() {
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int("."), 0);
        assert_eq!(lenient_int("e5"), 0);
    }

    #[test]
    fn test_lenient_int_fraction_and_exponent() {
        assert_eq!(lenient_int("4.9"), 4);
        assert_eq!(lenient_int("-4.9"), -4);
        assert_eq!(lenient_int(".5"), 0);
        assert_eq!(lenient_int("5."), 5);
        assert_eq!(lenient_int("1e3"), 1000);
        assert_eq!(lenient_int("2.5E2xyz"), 250);
        assert_eq!(lenient_int("7e"), 7);
        assert_eq!(lenient_int("7e+"), 7);
    }

    #[test]
    fn test_lenient_int_overflow() {
        assert_eq!(lenient_int("99999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999"), i64::MIN);
        assert_eq!(lenient_int("1e30"), i64::MAX);
        assert_eq!(lenient_int("1e999"), 0);
    }

    #[test]
    fn test_is_empty_code() {
        assert!(is_empty_code(""));
        assert!(is_empty_code("0"));
        assert!(!is_empty_code("00"));
        assert!(!is_empty_code("42"));
        assert!(!is_empty_code("abc"));
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("boom")));
        assert!(is_present(Some(" ")));
        assert!(!is_present(Some("")));
        assert!(!is_present(None));
    }
}
