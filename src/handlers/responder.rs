//! JSend 응답을 HTTP 응답으로 전송하는 핸들러 유틸리티

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};

use crate::core::errors::JSendResult;
use crate::domain::JSendResponse;

impl JSendResponse {
    /// `200 OK`와 `Content-Type: application/json` 헤더, 인코딩된 본문으로 응답합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// #[get("/users/{id}")]
    /// pub async fn get_user(path: web::Path<String>) -> Result<HttpResponse, JSendError> {
    ///     let user = user_service.find_by_id(&path).await?;
    ///     JSendResponse::success_from(&json!({ "user": user }))?.respond()
    /// }
    /// ```
    pub fn respond(&self) -> JSendResult<HttpResponse> {
        self.respond_with_status(StatusCode::OK)
    }

    /// HTTP 상태 코드를 지정하여 응답합니다.
    pub fn respond_with_status(&self, status: StatusCode) -> JSendResult<HttpResponse> {
        let body = self.encode()?;
        log::debug!("JSend 응답 전송 - status: {}, http: {}", self.status(), status);

        Ok(HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(body))
    }
}

/// 핸들러에서 `JSendResponse`를 그대로 반환할 수 있도록 합니다.
///
/// 인코딩에 실패하면 `JSendError`의 `ResponseError` 변환 결과로 응답합니다.
impl Responder for JSendResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.respond().unwrap_or_else(|e| e.error_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test::TestRequest;

    use crate::domain::{EncodingOptions, ErrorCode};

    fn body_text(response: HttpResponse) -> String {
        match response.into_body().try_into_bytes() {
            Ok(bytes) => String::from_utf8(bytes.to_vec()).unwrap(),
            Err(_) => panic!("body should be buffered"),
        }
    }

    #[test]
    fn test_respond_sends_json() {
        let response = JSendResponse::success(None);
        let http = response.respond().unwrap();

        assert_eq!(http.status(), StatusCode::OK);
        assert_eq!(http.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(body_text(http), response.encode().unwrap());
    }

    #[test]
    fn test_respond_uses_encoding_options() {
        let response =
            JSendResponse::fail(None).with_encoding_options(EncodingOptions::PRETTY_PRINT);
        let http = response.respond().unwrap();

        assert_eq!(body_text(http), "{\n    \"status\": \"fail\",\n    \"data\": null\n}");
    }

    #[test]
    fn test_respond_with_status() {
        let response = JSendResponse::error("boom", Some(ErrorCode::from(503)), None).unwrap();
        let http = response.respond_with_status(StatusCode::SERVICE_UNAVAILABLE).unwrap();

        assert_eq!(http.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_text(http), r#"{"status":"error","message":"boom","code":503}"#);
    }

    #[test]
    fn test_responder_impl() {
        let request = TestRequest::default().to_http_request();
        let http = JSendResponse::success(None).respond_to(&request);

        assert_eq!(http.status(), StatusCode::OK);
        assert_eq!(http.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(body_text(http), r#"{"status":"success","data":null}"#);
    }
}
