//! # HTTP Handlers Module
//!
//! JSend 응답 객체를 Actix-Web HTTP 응답으로 연결하는 모듈입니다.
//! 라우팅이나 요청 파싱은 제공하지 않으며, 응답 전송 경계만 담당합니다.
//!
//! ## 제공 기능
//!
//! - `JSendResponse::respond()` - `Content-Type: application/json` 헤더를 설정한 뒤 본문 기록
//! - `JSendResponse::respond_with_status()` - HTTP 상태 코드 지정
//! - `impl Responder for JSendResponse` - 핸들러에서 직접 반환
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{post, web};
//! use jsend_response::{JSendError, JSendResponse};
//!
//! #[post("/users")]
//! pub async fn create_user(
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<JSendResponse, JSendError> {
//!     if let Err(errors) = payload.validate() {
//!         return JSendResponse::fail_from(&errors);
//!     }
//!     let user = user_service.create_user(payload.into_inner()).await?;
//!     JSendResponse::success_from(&serde_json::json!({ "user": user }))
//! }
//! ```
//!
//! 핸들러가 `Err(JSendError)`를 반환하면 `ResponseError` 구현에 의해
//! `{"status":"error","message":...,"code":<HTTP status>}` 형식으로 응답됩니다.

pub mod responder;
