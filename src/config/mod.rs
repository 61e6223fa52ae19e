//! # Configuration Module
//!
//! JSend 응답의 기본 출력 형식과 디코딩 제한을 환경 변수로 관리합니다.
//! 응답 객체 자체는 설정을 읽지 않으며, 설정값은 호출자가 명시적으로 적용하거나
//! `ResponseError` 변환처럼 HTTP 경계에서만 사용됩니다.
//!
//! ## 모듈 구성
//!
//! - [`jsend_config`] - 실행 환경, 인코딩 옵션, 디코딩 깊이 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use jsend_response::config::JSendConfig;
//! use jsend_response::JSendResponse;
//!
//! let config = JSendConfig::global();
//!
//! let response = JSendResponse::success(None)
//!     .with_encoding_options(config.encoding_options);
//!
//! let decoded = JSendResponse::decode_with(body, &config.decode_options())?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"    # development/dev, 그 외는 production 취급
//! export JSEND_PRETTY_PRINT="true"    # true/false, 1/0, yes/no, on/off
//! export JSEND_DECODE_MAX_DEPTH="64"  # 1 이상의 정수
//! ```

pub mod jsend_config;

pub use jsend_config::*;
