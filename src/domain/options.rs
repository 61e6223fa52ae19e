//! 인코딩/디코딩 옵션
//!
//! 텍스트 형식만 바꾸는 옵션들입니다. 어떤 옵션도 JSend 매핑의 내용이나
//! 응답 간의 동등성에 영향을 주지 않습니다.

use std::ops::{BitOr, BitOrAssign};

/// 디코딩 시 기본 최대 중첩 깊이
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// JSON 텍스트 인코딩 플래그 (비트마스크)
///
/// 알 수 없는 비트는 보존되지만 무시됩니다.
///
/// ```rust,ignore
/// let mut response = JSendResponse::success(None);
/// response.set_encoding_options(EncodingOptions::PRETTY_PRINT);
/// assert!(response.encode()?.contains('\n'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncodingOptions(u32);

impl EncodingOptions {
    /// 압축 출력 (기본값)
    pub const NONE: EncodingOptions = EncodingOptions(0);
    /// 4칸 들여쓰기의 여러 줄 출력
    pub const PRETTY_PRINT: EncodingOptions = EncodingOptions(1 << 7);

    pub const fn from_bits(bits: u32) -> Self {
        EncodingOptions(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: EncodingOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_pretty(&self) -> bool {
        self.contains(Self::PRETTY_PRINT)
    }
}

impl BitOr for EncodingOptions {
    type Output = EncodingOptions;

    fn bitor(self, rhs: Self) -> Self::Output {
        EncodingOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for EncodingOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// JSON 텍스트 디코딩 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// 허용되는 최대 중첩 깊이
    ///
    /// 객체와 배열이 각각 한 단계를 차지하고 스칼라는 0입니다.
    /// 따라서 `{"status":"success","data":null}`의 깊이는 1입니다.
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_flags() {
        assert!(!EncodingOptions::default().is_pretty());
        assert!(EncodingOptions::PRETTY_PRINT.is_pretty());

        let mut options = EncodingOptions::from_bits(1);
        options |= EncodingOptions::PRETTY_PRINT;
        assert!(options.is_pretty());
        assert!(options.contains(EncodingOptions::from_bits(1)));
        assert_eq!(options.bits(), 129);
        assert_eq!(
            EncodingOptions::NONE | EncodingOptions::PRETTY_PRINT,
            EncodingOptions::PRETTY_PRINT
        );
    }

    #[test]
    fn test_decode_options_default_depth() {
        assert_eq!(DecodeOptions::default().max_depth, 512);
        assert_eq!(DecodeOptions::with_max_depth(3).max_depth, 3);
    }
}
