//! JSend 응답 값 객체
//!
//! [JSend](https://github.com/omniti-labs/jsend) 규약을 따르는 API 응답 봉투를
//! 생성, 검증, 인코딩, 디코딩합니다. JSend는 `success`, `fail`, `error` 세 가지
//! 상태만 가지는 가벼운 JSON 응답 형식입니다.
//!
//! # Features
//!
//! - **검증된 생성**: 잘못된 status나 메시지 없는 error 응답은 생성 불가
//! - **결정적 직렬화**: `status`, `data`, `message`, `code` 순서의 고정된 매핑
//! - **검증된 역직렬화**: JSON 텍스트에서 같은 불변 조건을 다시 검사하여 재구성
//! - **Actix-Web 통합**: `Responder`, `ResponseError` 구현
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Handlers     │ ← respond(), Responder
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  JSendResponse  │ ← 생성/검증, as_mapping, encode, decode
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   serde_json    │ ← JSON 텍스트 코덱
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use jsend_response::{ErrorCode, JSendResponse};
//!
//! let response = JSendResponse::error("Database unavailable", Some(ErrorCode::from(503)), None)?;
//! let text = response.encode()?;
//! // {"status":"error","message":"Database unavailable","code":503}
//!
//! let decoded = JSendResponse::decode(&text)?;
//! assert_eq!(decoded, response);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod utils;

pub use crate::core::errors::{JSendError, JSendResult};
pub use crate::domain::{
    DecodeOptions, EncodingOptions, ErrorCode, JSendData, JSendResponse, JSendStatus,
};
