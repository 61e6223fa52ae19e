//! # JSend Error Handling
//!
//! JSend 응답 객체에서 발생하는 모든 실패를 하나의 열거형으로 표현합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 그대로 JSend `error` 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | JSendError | 의미 | HTTP Status |
//! |------------|------|-------------|
//! | `InvalidEnvelope` | 파싱은 성공했지만 JSend 구조 규칙 위반 | 400 Bad Request |
//! | `MalformedText` | 입력이 JSON 문법 자체를 만족하지 않음 | 400 Bad Request |
//! | `PreconditionViolation` | error 전용 접근자를 다른 상태에서 호출 (프로그래머 실수) | 500 Internal Server Error |
//! | `Serialization` | 유효한 객체의 인코딩 실패 (정상적으로는 발생하지 않음) | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use jsend_response::core::errors::{JSendError, JSendResult};
//! use jsend_response::JSendResponse;
//!
//! fn parse_upstream(body: &str) -> JSendResult<JSendResponse> {
//!     let response = JSendResponse::decode(body)?;
//!     if response.is_error() {
//!         log::warn!("upstream error: {}", response.error_message()?);
//!     }
//!     Ok(response)
//! }
//! ```
//!
//! 코어는 에러를 로그로 남기거나 삼키지 않습니다. 모든 실패는 호출자에게
//! `Err`로 즉시 반환되며, 처리 방식은 호출자가 결정합니다.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::config::JSendConfig;
use crate::domain::{ErrorCode, JSendResponse};

/// JSend 응답 처리 중 발생하는 에러 타입
///
/// 메시지 문자열은 외부 호출자가 어떤 검증 경로에서 실패했는지 구분하는 데
/// 사용할 수 있으므로, 각 검증 단계는 고유한 메시지를 사용합니다.
#[derive(Error, Debug)]
pub enum JSendError {
    /// JSend 구조 규칙 위반
    ///
    /// 잘못된 status, 누락되거나 빈 error 메시지, 누락된 data 키,
    /// 필드 타입 불일치, 객체가 아닌 최상위 값 등에서 발생합니다.
    #[error("{0}")]
    InvalidEnvelope(String),

    /// 문법적으로 유효하지 않은 JSON 텍스트
    ///
    /// `""`처럼 파싱 자체는 성공하는 스칼라 값은 여기에 해당하지 않고
    /// `InvalidEnvelope`로 분류됩니다.
    #[error("{0}")]
    MalformedText(String),

    /// error 상태가 아닌 응답에서 error 전용 접근자를 호출함
    #[error("{0}")]
    PreconditionViolation(String),

    /// 인코딩 실패
    #[error("Failed to encode JSend: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResponseError for JSendError {
    fn status_code(&self) -> StatusCode {
        match self {
            JSendError::InvalidEnvelope(_) | JSendError::MalformedText(_) => {
                StatusCode::BAD_REQUEST
            }
            JSendError::PreconditionViolation(_) | JSendError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러를 JSend `error` 응답으로 변환합니다.
    ///
    /// 응답 본문은 다음과 같은 형식이며, `code`에는 HTTP 상태 코드가 들어갑니다.
    ///
    /// ```json
    /// {
    ///   "status": "error",
    ///   "message": "JSend must contain data unless it is an error.",
    ///   "code": 400
    /// }
    /// ```
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let code = ErrorCode::from(i64::from(status.as_u16()));

        let body = JSendResponse::error(self.to_string(), Some(code), None)
            .map(|response| {
                response.with_encoding_options(JSendConfig::global().encoding_options)
            })
            .and_then(|response| response.encode());

        match body {
            Ok(body) => HttpResponse::build(status)
                .content_type(ContentType::json())
                .body(body),
            Err(_) => HttpResponse::build(status).json(serde_json::json!({
                "status": "error",
                "message": self.to_string(),
                "code": status.as_u16()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type JSendResult<T> = Result<T, JSendError>;
