//! 공통 유틸리티 함수 모듈
//!
//! JSend 필드 정규화에 필요한 문자열 처리 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 관대한 정수 변환, 빈 값 판정 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use jsend_response::utils::string_utils::lenient_int;
//!
//! assert_eq!(lenient_int("42"), 42);
//! ```

pub mod string_utils;
