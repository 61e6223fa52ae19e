use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::JSendError;

/// JSend 응답 상태
///
/// JSend 규약은 정확히 세 가지 상태만 허용합니다. 문자열 변환은 대소문자를
/// 구분하며, `"Success"`나 `"ERROR"`는 유효하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JSendStatus {
    /// 요청이 정상 처리됨. `data` 필드 필수 (null 가능)
    Success,
    /// 제출된 데이터 문제 또는 API 호출 전제 조건 불충족. `data` 필드 필수 (null 가능)
    Fail,
    /// 요청 처리 중 오류 발생. `message` 필수, `code`와 `data`는 선택
    Error,
}

impl JSendStatus {
    pub const SUCCESS: &'static str = "success";
    pub const FAIL: &'static str = "fail";
    pub const ERROR: &'static str = "error";

    pub fn as_str(&self) -> &'static str {
        match self {
            JSendStatus::Success => Self::SUCCESS,
            JSendStatus::Fail => Self::FAIL,
            JSendStatus::Error => Self::ERROR,
        }
    }
}

impl fmt::Display for JSendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JSendStatus {
    type Err = JSendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::SUCCESS => Ok(JSendStatus::Success),
            Self::FAIL => Ok(JSendStatus::Fail),
            Self::ERROR => Ok(JSendStatus::Error),
            _ => Err(JSendError::InvalidEnvelope(
                "Status does not conform to JSend spec.".to_string(),
            )),
        }
    }
}
