//! # JSend Response
//!
//! JSend 규약을 따르는 응답 값 객체입니다. 생성 시점에 검증되며, 이후에는
//! 인코딩 옵션을 제외하고 변경할 수 없습니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! success()/fail()/error()/new()  ─▶  JSendResponse
//!                                          │ as_mapping()
//!                                          ▼
//!                              {status, data, message, code}
//!                                          │ encode()
//!                                          ▼
//!                                      JSON 텍스트
//!                                          │ decode()
//!                                          ▼
//!                          JSendResponse (원본과 동등)
//! ```
//!
//! ## 와이어 형식
//!
//! | 키 | 존재 조건 | 타입 |
//! |----|-----------|------|
//! | `status` | 항상 | `"success"`, `"fail"`, `"error"` |
//! | `data` | success/fail은 항상, error는 비어 있지 않은 data가 있을 때만 | object 또는 null |
//! | `message` | error일 때만 | string |
//! | `code` | error이고 비어 있지 않은 코드가 있을 때만 | integer |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use jsend_response::{ErrorCode, JSendResponse};
//! use serde_json::json;
//!
//! let data = json!({"user": {"id": 1}}).as_object().cloned();
//! let ok = JSendResponse::success(data);
//! assert_eq!(ok.encode()?, r#"{"status":"success","data":{"user":{"id":1}}}"#);
//!
//! let failed = JSendResponse::error("boom", Some(ErrorCode::from("42")), None)?;
//! assert_eq!(failed.encode()?, r#"{"status":"error","message":"boom","code":42}"#);
//!
//! let decoded = JSendResponse::decode(&failed.encode()?)?;
//! assert_eq!(decoded, failed);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::core::errors::{JSendError, JSendResult};
use crate::domain::error_code::ErrorCode;
use crate::domain::options::{DecodeOptions, EncodingOptions};
use crate::domain::status::JSendStatus;
use crate::utils::string_utils::is_present;

pub const KEY_STATUS: &str = "status";
pub const KEY_DATA: &str = "data";
pub const KEY_MESSAGE: &str = "message";
pub const KEY_CODE: &str = "code";

/// JSend `data` 페이로드. 최상위는 항상 객체입니다.
pub type JSendData = Map<String, Value>;

/// JSend 응답 값 객체
///
/// 동등성(`PartialEq`)은 와이어 표현 기준입니다. 두 응답의 [`as_mapping`](Self::as_mapping)
/// 결과가 같으면 같은 응답으로 봅니다. 따라서 인코딩 옵션은 비교에서 제외되고,
/// 빈 data 객체는 data 없음과 같으며, `ErrorCode::Text("42")`와 `ErrorCode::Int(42)`도 같습니다.
///
/// 인코딩 옵션 변경은 `&mut self`가 필요하므로 같은 인스턴스를 동시에 읽고
/// 변경하는 것은 외부 동기화 없이는 불가능합니다.
#[derive(Debug, Clone)]
pub struct JSendResponse {
    status: JSendStatus,
    data: Option<JSendData>,
    error_message: Option<String>,
    error_code: Option<ErrorCode>,
    encoding_options: EncodingOptions,
}

impl JSendResponse {
    /// 요청이 정상 처리된 응답. `data`는 선택입니다.
    pub fn success(data: Option<JSendData>) -> Self {
        Self::without_error(JSendStatus::Success, data)
    }

    /// 제출된 데이터에 문제가 있거나 호출 전제 조건이 충족되지 않은 응답
    pub fn fail(data: Option<JSendData>) -> Self {
        Self::without_error(JSendStatus::Fail, data)
    }

    /// 요청 처리 중 오류가 발생한 응답
    ///
    /// # Errors
    ///
    /// * `InvalidEnvelope` - `message`가 빈 문자열인 경우
    pub fn error(
        message: impl Into<String>,
        code: Option<ErrorCode>,
        data: Option<JSendData>,
    ) -> JSendResult<Self> {
        Self::with_status(JSendStatus::Error, data, Some(message.into()), code)
    }

    /// 일반 생성자
    ///
    /// 검증 순서:
    /// 1. `status`가 `"success"`, `"fail"`, `"error"` 중 하나가 아니면 실패
    /// 2. `status`가 error인데 메시지가 없거나 비어 있으면 실패
    ///
    /// error가 아닌 상태에서는 `error_message`와 `error_code`가 무시됩니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let response = JSendResponse::new("fail", None, None, None)?;
    /// assert!(response.is_fail());
    ///
    /// assert!(JSendResponse::new("ok", None, None, None).is_err());
    /// assert!(JSendResponse::new("error", None, Some(String::new()), None).is_err());
    /// ```
    pub fn new(
        status: &str,
        data: Option<JSendData>,
        error_message: Option<String>,
        error_code: Option<ErrorCode>,
    ) -> JSendResult<Self> {
        let status = status.parse::<JSendStatus>()?;
        Self::with_status(status, data, error_message, error_code)
    }

    /// 타입이 지정된 상태로 생성합니다. 메시지 검증 규칙은 [`new`](Self::new)와 같습니다.
    pub fn with_status(
        status: JSendStatus,
        data: Option<JSendData>,
        error_message: Option<String>,
        error_code: Option<ErrorCode>,
    ) -> JSendResult<Self> {
        if status != JSendStatus::Error {
            return Ok(Self::without_error(status, data));
        }

        if !is_present(error_message.as_deref()) {
            return Err(JSendError::InvalidEnvelope(
                "Errors must contain a message.".to_string(),
            ));
        }

        Ok(Self {
            status,
            data,
            error_message,
            error_code,
            encoding_options: EncodingOptions::default(),
        })
    }

    /// 직렬화 가능한 DTO를 `data`로 사용하는 success 응답
    ///
    /// DTO는 JSON 객체로 직렬화되어야 합니다. `null`로 직렬화되면 data 없음으로 처리합니다.
    ///
    /// ```rust,ignore
    /// #[derive(Serialize)]
    /// struct UserPayload { user: UserResponse }
    ///
    /// let response = JSendResponse::success_from(&UserPayload { user })?;
    /// ```
    pub fn success_from<T: Serialize + ?Sized>(payload: &T) -> JSendResult<Self> {
        Ok(Self::success(payload_to_data(payload)?))
    }

    /// 직렬화 가능한 DTO를 `data`로 사용하는 fail 응답
    pub fn fail_from<T: Serialize + ?Sized>(payload: &T) -> JSendResult<Self> {
        Ok(Self::fail(payload_to_data(payload)?))
    }

    fn without_error(status: JSendStatus, data: Option<JSendData>) -> Self {
        Self {
            status,
            data,
            error_message: None,
            error_code: None,
            encoding_options: EncodingOptions::default(),
        }
    }

    pub fn status(&self) -> JSendStatus {
        self.status
    }

    pub fn data(&self) -> Option<&JSendData> {
        self.data.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.status == JSendStatus::Success
    }

    pub fn is_fail(&self) -> bool {
        self.status == JSendStatus::Fail
    }

    pub fn is_error(&self) -> bool {
        self.status == JSendStatus::Error
    }

    /// error 메시지를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `PreconditionViolation` - error 상태가 아닌 경우. 호출 전에 `is_error()`를 확인해야 합니다.
    pub fn error_message(&self) -> JSendResult<&str> {
        if !self.is_error() {
            return Err(JSendError::PreconditionViolation(
                "Only responses with a status of error may have an error message.".to_string(),
            ));
        }
        Ok(self.error_message.as_deref().unwrap_or_default())
    }

    /// error code를 반환합니다. 코드 없이 생성된 error 응답은 `Ok(None)`입니다.
    ///
    /// # Errors
    ///
    /// * `PreconditionViolation` - error 상태가 아닌 경우
    pub fn error_code(&self) -> JSendResult<Option<&ErrorCode>> {
        if !self.is_error() {
            return Err(JSendError::PreconditionViolation(
                "Only responses with a status of error may have an error code.".to_string(),
            ));
        }
        Ok(self.error_code.as_ref())
    }

    pub fn encoding_options(&self) -> EncodingOptions {
        self.encoding_options
    }

    /// 텍스트 출력 형식만 변경합니다. 매핑과 동등성에는 영향이 없습니다.
    pub fn set_encoding_options(&mut self, options: EncodingOptions) {
        self.encoding_options = options;
    }

    pub fn with_encoding_options(mut self, options: EncodingOptions) -> Self {
        self.encoding_options = options;
        self
    }

    /// 와이어 표현 매핑을 생성합니다.
    ///
    /// 키 순서는 `status`, `data`, `message`, `code`로 고정입니다.
    /// 빈 data 객체는 data가 없는 것과 같이 취급됩니다.
    pub fn as_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(
            KEY_STATUS.to_string(),
            Value::String(self.status.as_str().to_string()),
        );

        match self.data.as_ref().filter(|data| !data.is_empty()) {
            Some(data) => {
                mapping.insert(KEY_DATA.to_string(), Value::Object(data.clone()));
            }
            // error에서 data는 선택이므로 null 대신 키 자체를 생략
            None if !self.is_error() => {
                mapping.insert(KEY_DATA.to_string(), Value::Null);
            }
            None => {}
        }

        if self.is_error() {
            mapping.insert(
                KEY_MESSAGE.to_string(),
                Value::String(self.error_message.clone().unwrap_or_default()),
            );

            if let Some(code) = self.error_code.as_ref().filter(|code| !code.is_empty()) {
                mapping.insert(KEY_CODE.to_string(), Value::from(code.to_int()));
            }
        }

        mapping
    }

    /// JSON 텍스트로 인코딩합니다.
    ///
    /// `PRETTY_PRINT`가 설정되어 있으면 4칸 들여쓰기로 출력합니다.
    ///
    /// # Errors
    ///
    /// * `Serialization` - 인코딩 실패 (유효한 인스턴스에서는 발생하지 않음)
    pub fn encode(&self) -> JSendResult<String> {
        let mapping = self.as_mapping();

        if !self.encoding_options.is_pretty() {
            return Ok(serde_json::to_string(&mapping)?);
        }

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        mapping.serialize(&mut serializer)?;

        String::from_utf8(buffer)
            .map_err(|e| JSendError::Serialization(serde_json::Error::custom(e)))
    }

    /// [`encode`](Self::encode)와 같지만 실패 시 빈 문자열을 반환합니다.
    pub fn to_text(&self) -> String {
        self.encode().unwrap_or_default()
    }

    /// JSON 텍스트를 디코딩합니다. 최대 중첩 깊이는 512입니다.
    pub fn decode(text: &str) -> JSendResult<Self> {
        Self::decode_with(text, &DecodeOptions::default())
    }

    /// 옵션을 지정하여 JSON 텍스트를 디코딩합니다.
    ///
    /// # Errors
    ///
    /// * `MalformedText` - JSON 문법 오류 또는 최대 중첩 깊이 초과
    /// * `InvalidEnvelope` - JSON은 유효하지만 JSend 구조 규칙 위반
    pub fn decode_with(text: &str, options: &DecodeOptions) -> JSendResult<Self> {
        if exceeds_depth(text, options.max_depth) {
            return Err(JSendError::MalformedText(format!(
                "JSON is invalid: maximum nesting depth of {} exceeded",
                options.max_depth
            )));
        }

        Self::try_from(parse_unbounded(text).map_err(malformed)?)
    }
}

impl TryFrom<Value> for JSendResponse {
    type Error = JSendError;

    /// 파싱된 JSON 값에서 응답을 재구성합니다.
    ///
    /// 구조 검사를 먼저 수행한 뒤 일반 생성자로 위임하며, 생성자는 자체 검증을
    /// 다시 적용합니다. 두 단계의 에러 메시지는 서로 다릅니다.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut envelope) = value else {
            return Err(invalid_envelope("JSend must be an object with a valid status."));
        };

        let has_data_key = envelope.contains_key(KEY_DATA);

        let status = match envelope.remove(KEY_STATUS) {
            Some(Value::String(status)) => status,
            Some(_) => return Err(field_type_mismatch(KEY_STATUS, "a string")),
            None => return Err(invalid_envelope("JSend must be an object with a valid status.")),
        };

        let data = match envelope.remove(KEY_DATA) {
            None | Some(Value::Null) => None,
            Some(Value::Object(data)) => Some(data),
            Some(_) => return Err(field_type_mismatch(KEY_DATA, "an object or null")),
        };

        let message = match envelope.remove(KEY_MESSAGE) {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message),
            Some(_) => return Err(field_type_mismatch(KEY_MESSAGE, "a string")),
        };

        let code = match envelope.remove(KEY_CODE) {
            None | Some(Value::Null) => None,
            Some(Value::String(code)) => Some(ErrorCode::Text(code)),
            Some(Value::Number(code)) => Some(match code.as_i64() {
                Some(code) => ErrorCode::Int(code),
                None if code.as_f64() == Some(0.0) => ErrorCode::Int(0),
                None => ErrorCode::Text(code.to_string()),
            }),
            Some(_) => return Err(field_type_mismatch(KEY_CODE, "a string or an integer")),
        };

        let is_error = status == JSendStatus::ERROR;

        if is_error && message.is_none() {
            return Err(invalid_envelope("JSend errors must contain a message."));
        }
        if !is_error && !has_data_key {
            return Err(invalid_envelope("JSend must contain data unless it is an error."));
        }

        Self::new(&status, data, message, code)
    }
}

impl FromStr for JSendResponse {
    type Err = JSendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl PartialEq for JSendResponse {
    fn eq(&self, other: &Self) -> bool {
        self.as_mapping() == other.as_mapping()
    }
}

impl fmt::Display for JSendResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Serialize for JSendResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_mapping().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JSendResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        JSendResponse::try_from(value).map_err(serde::de::Error::custom)
    }
}

fn payload_to_data<T: Serialize + ?Sized>(payload: &T) -> JSendResult<Option<JSendData>> {
    match serde_json::to_value(payload)? {
        Value::Null => Ok(None),
        Value::Object(data) => Ok(Some(data)),
        _ => Err(invalid_envelope("JSend data must be an object.")),
    }
}

/// serde_json의 128단계 재귀 제한을 끄고 파싱합니다.
///
/// 깊이 제한은 [`exceeds_depth`]가 담당하며, 깊은 입력은 `serde_stacker`가
/// 스택을 힙으로 늘려 처리합니다.
fn parse_unbounded(text: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();

    let value = {
        let stacked = serde_stacker::Deserializer::new(&mut deserializer);
        Value::deserialize(stacked)?
    };
    deserializer.end()?;

    Ok(value)
}

/// 텍스트의 중첩 깊이가 `max_depth`를 넘는지 파싱 전에 검사합니다.
///
/// 객체와 배열은 한 단계씩, 스칼라는 0. 문자열 안의 괄호는 세지 않습니다.
/// 문법 오류는 여기서 판단하지 않고 파서에 맡깁니다.
fn exceeds_depth(text: &str, max_depth: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > max_depth {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    false
}

fn malformed(e: serde_json::Error) -> JSendError {
    JSendError::MalformedText(format!("JSON is invalid: {e}"))
}

fn invalid_envelope(message: &str) -> JSendError {
    JSendError::InvalidEnvelope(message.to_string())
}

fn field_type_mismatch(field: &str, expected: &str) -> JSendError {
    JSendError::InvalidEnvelope(format!("JSend field '{field}' must be {expected}."))
}
