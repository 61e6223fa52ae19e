//! # Core Module
//!
//! 크레이트 전역에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **JSendError**: 생성, 디코딩, 접근자, 인코딩 실패를 구분하는 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 JSend `error` 응답 자동 생성
//! - **JSendResult**: `Result<T, JSendError>` 별칭

pub mod errors;

pub use errors::{JSendError, JSendResult};
