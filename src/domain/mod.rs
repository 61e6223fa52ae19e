//! # Domain Layer Module
//!
//! JSend 응답 값 객체와 그 구성 요소를 정의하는 도메인 계층입니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! domain/
//! ├── status.rs       - JSendStatus (success / fail / error)
//! ├── error_code.rs   - ErrorCode (문자열 또는 정수, 출력 시 정수로 정규화)
//! ├── options.rs      - EncodingOptions, DecodeOptions
//! └── response.rs     - JSendResponse (생성, 접근자, 매핑, 인코딩, 디코딩)
//! ```
//!
//! ## 불변 조건
//!
//! - status는 항상 세 값 중 하나입니다.
//! - error 응답은 항상 비어 있지 않은 메시지를 가집니다.
//! - error가 아닌 응답에서 메시지/코드 접근은 `PreconditionViolation`입니다.
//! - 생성 이후에는 인코딩 옵션 외에 변경할 수 없습니다.

pub mod error_code;
pub mod options;
pub mod response;
pub mod status;

pub use error_code::ErrorCode;
pub use options::{DEFAULT_MAX_DEPTH, DecodeOptions, EncodingOptions};
pub use response::{JSendData, JSendResponse, KEY_CODE, KEY_DATA, KEY_MESSAGE, KEY_STATUS};
pub use status::JSendStatus;
