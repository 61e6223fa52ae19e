//! JSend 인코딩/디코딩 기본값 설정 모듈
//!
//! 실행 환경과 환경 변수를 기반으로 인코딩 옵션과 디코딩 깊이 제한의 기본값을 결정합니다.

use std::env;

use log::{error, info};
use once_cell::sync::Lazy;

use crate::domain::{DEFAULT_MAX_DEPTH, DecodeOptions, EncodingOptions};

static GLOBAL_CONFIG: Lazy<JSendConfig> = Lazy::new(JSendConfig::from_env);

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 읽기 쉬운 pretty print 출력이 기본값
    Development,
    /// 그 외 모든 환경 (test, staging 포함) - 압축 출력
    Production,
}

impl Environment {
    /// 환경 이름에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `name` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// `development`/`dev`이면 `Development`, 그 외에는 `Production`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// JSend 설정
///
/// # Environment Variables
///
/// * `ENVIRONMENT` - 실행 환경 (기본값: production)
/// * `JSEND_PRETTY_PRINT` - pretty print 여부 (기본값: development에서만 true)
/// * `JSEND_DECODE_MAX_DEPTH` - 디코딩 최대 중첩 깊이 (기본값: 512)
///
/// # Examples
///
/// ```bash
/// # 로컬 개발
/// ENVIRONMENT=development cargo run
///
/// # 운영 환경에서 디코딩 깊이 제한
/// JSEND_DECODE_MAX_DEPTH=32
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JSendConfig {
    pub environment: Environment,
    pub encoding_options: EncodingOptions,
    pub decode_max_depth: usize,
}

impl JSendConfig {
    /// 프로세스 환경 변수에서 한 번만 로드되는 전역 설정
    pub fn global() -> &'static JSendConfig {
        &GLOBAL_CONFIG
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정을 생성합니다.
    ///
    /// 파싱할 수 없는 값은 에러 로그를 남기고 환경별 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|name| Environment::from_name(&name))
            .unwrap_or(Environment::Production);

        let pretty_default = environment == Environment::Development;
        let pretty = match lookup("JSEND_PRETTY_PRINT") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                error!("JSEND_PRETTY_PRINT 파싱 실패: {}. 기본값 {} 사용", raw, pretty_default);
                pretty_default
            }),
            None => pretty_default,
        };

        let decode_max_depth = match lookup("JSEND_DECODE_MAX_DEPTH") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    error!(
                        "JSEND_DECODE_MAX_DEPTH 파싱 실패: {}. 기본값 {} 사용",
                        raw, DEFAULT_MAX_DEPTH
                    );
                    DEFAULT_MAX_DEPTH
                }
            },
            None => DEFAULT_MAX_DEPTH,
        };

        let config = Self {
            environment,
            encoding_options: if pretty {
                EncodingOptions::PRETTY_PRINT
            } else {
                EncodingOptions::NONE
            },
            decode_max_depth,
        };

        info!("JSend 설정 로드됨: {:?}", config);
        config
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::with_max_depth(self.decode_max_depth)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> JSendConfig {
        let _ = env_logger::builder().is_test(true).try_init();
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        JSendConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name(" Development "), Environment::Development);
        assert_eq!(Environment::from_name("staging"), Environment::Production);
        assert_eq!(Environment::from_name("test"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = config_from(&[]);

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.encoding_options, EncodingOptions::NONE);
        assert_eq!(config.decode_max_depth, 512);
        assert_eq!(config.decode_options(), DecodeOptions::default());
    }

    #[test]
    fn test_development_defaults_to_pretty_print() {
        let config = config_from(&[("ENVIRONMENT", "development")]);
        assert!(config.encoding_options.is_pretty());

        let config = config_from(&[
            ("ENVIRONMENT", "development"),
            ("JSEND_PRETTY_PRINT", "false"),
        ]);
        assert!(!config.encoding_options.is_pretty());
    }

    #[test]
    fn test_staging_uses_compact_output() {
        let config = config_from(&[("ENVIRONMENT", "staging")]);

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.encoding_options, EncodingOptions::NONE);
    }

    #[test]
    fn test_explicit_pretty_print_in_production() {
        let config = config_from(&[("JSEND_PRETTY_PRINT", "on")]);
        assert!(config.encoding_options.is_pretty());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("JSEND_PRETTY_PRINT", "sometimes"),
            ("JSEND_DECODE_MAX_DEPTH", "deep"),
        ]);
        assert_eq!(config.encoding_options, EncodingOptions::NONE);
        assert_eq!(config.decode_max_depth, DEFAULT_MAX_DEPTH);

        let config = config_from(&[("JSEND_DECODE_MAX_DEPTH", "0")]);
        assert_eq!(config.decode_max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_custom_decode_depth() {
        let config = config_from(&[("JSEND_DECODE_MAX_DEPTH", " 32 ")]);
        assert_eq!(config.decode_options().max_depth, 32);
    }
}
