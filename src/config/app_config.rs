//! 애플리케이션 설정 로딩 및 검증 모듈
//!
//! 실행 모드, 서버 바인딩, MongoDB 연결, Rate Limiting, 로그 레벨 설정을
//! 환경 변수에서 읽어 하나의 [`AppConfig`]로 모읍니다.
//! 잘못된 값은 첫 번째 오류에서 멈추지 않고 모두 수집되어
//! [`ConfigError::Invalid`] 하나로 보고됩니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use thiserror::Error;

/// `MONGODB_URI`가 없을 때 사용하는 개발용 기본 연결 문자열
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/user_service";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 에러 응답에 상세 정보 포함
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 프로덕션 환경 - 내부 정보 노출 금지
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 파싱합니다.
    ///
    /// 대소문자를 구분하지 않으며 `dev`, `prod` 같은 축약형도 허용합니다.
    /// 알 수 없는 값이면 `None`을 반환합니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "test" | "testing" => Some(Environment::Test),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

/// 최소 로그 레벨
///
/// 운영 도구들과 호환되도록 `http`, `verbose`, `silly` 이름도 받아들이고
/// `log` 크레이트의 [`LevelFilter`]로 변환합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Http,
    Verbose,
    Debug,
    Silly,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "http" => Some(LogLevel::Http),
            "verbose" => Some(LogLevel::Verbose),
            "debug" => Some(LogLevel::Debug),
            "silly" => Some(LogLevel::Silly),
            _ => None,
        }
    }

    /// `env_logger` 필터로 사용할 레벨을 반환합니다.
    ///
    /// | 설정값 | LevelFilter |
    /// |--------|-------------|
    /// | `error` | Error |
    /// | `warn` | Warn |
    /// | `info`, `http` | Info |
    /// | `verbose`, `debug` | Debug |
    /// | `silly` | Trace |
    pub fn to_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info | LogLevel::Http => LevelFilter::Info,
            LogLevel::Verbose | LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Silly => LevelFilter::Trace,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩할 포트. 기본값: 3000
    pub port: u16,
    /// JSON 요청 본문 최대 크기 (바이트). 기본값: 10KiB
    pub body_limit_bytes: usize,
}

/// Rate Limiting 설정
///
/// `window` 동안 클라이언트(피어 IP)당 최대 `max_requests`개의 요청을 허용합니다.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
}

impl RateLimitConfig {
    /// 요청 한 개가 다시 채워지는 주기
    ///
    /// 버스트 크기를 `max_requests`로 두고 이 주기로 보충하면
    /// 한 윈도우 동안 최대 `max_requests`개의 요청이 통과합니다.
    pub fn replenish_period(&self) -> Duration {
        (self.window / self.max_requests.max(1)).max(Duration::from_nanos(1))
    }
}

/// 검증이 끝난 전체 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb_uri: String,
    pub rate_limit: RateLimitConfig,
    pub log_level: LogLevel,
}

/// 설정 검증 실패
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 하나 이상의 설정값이 잘못됨
    #[error("Invalid environment configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `ENVIRONMENT` 또는 `NODE_ENV`: development | production | test (기본값: development)
    /// - `HOST`: 바인딩 호스트 (기본값: 0.0.0.0)
    /// - `PORT`: 바인딩 포트 (기본값: 3000)
    /// - `MONGODB_URI`: MongoDB 연결 URI (프로덕션에서는 필수)
    /// - `RATE_LIMIT_WINDOW_MS`: 윈도우 길이 ms (기본값: 900000)
    /// - `RATE_LIMIT_MAX`: 윈도우당 최대 요청 수 (기본값: 100)
    /// - `LOG_LEVEL`: 최소 로그 레벨 (기본값: info)
    /// - `BODY_LIMIT_KB`: JSON 본문 최대 크기 KiB (기본값: 10)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = AppConfig::from_env().unwrap_or_else(|e| {
    ///     error!("{}", e);
    ///     std::process::exit(1);
    /// });
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다.
    ///
    /// 테스트에서 프로세스 환경 변수를 건드리지 않고 설정을 만들 때 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = match read("ENVIRONMENT").or_else(|| read("NODE_ENV")) {
            None => Environment::Development,
            Some(value) => Environment::parse(&value).unwrap_or_else(|| {
                problems.push(format!(
                    "NODE_ENV must be one of development, production, test (got '{}')",
                    value
                ));
                Environment::Development
            }),
        };

        let host = read("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = read_number::<u16>(read("PORT"), "PORT", 3000, 1, &mut problems);
        let body_limit_kb = read_number::<usize>(read("BODY_LIMIT_KB"), "BODY_LIMIT_KB", 10, 1, &mut problems);
        let body_limit_bytes = body_limit_kb.checked_mul(1024).unwrap_or_else(|| {
            problems.push(format!("BODY_LIMIT_KB is too large (got '{}')", body_limit_kb));
            0
        });

        let mongodb_uri = match read("MONGODB_URI") {
            Some(uri) => {
                if !(uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://")) {
                    problems.push("MONGODB_URI must start with mongodb:// or mongodb+srv://".to_string());
                }
                uri
            }
            None if environment.is_production() => {
                problems.push("MONGODB_URI is required in production".to_string());
                String::new()
            }
            None => DEFAULT_MONGODB_URI.to_string(),
        };

        let window_ms = read_number::<u64>(
            read("RATE_LIMIT_WINDOW_MS"),
            "RATE_LIMIT_WINDOW_MS",
            15 * 60 * 1000,
            1,
            &mut problems,
        );
        let max_requests = read_number::<u32>(read("RATE_LIMIT_MAX"), "RATE_LIMIT_MAX", 100, 1, &mut problems);

        let log_level = match read("LOG_LEVEL") {
            None => LogLevel::Info,
            Some(value) => LogLevel::parse(&value).unwrap_or_else(|| {
                problems.push(format!(
                    "LOG_LEVEL must be one of error, warn, info, http, verbose, debug, silly (got '{}')",
                    value
                ));
                LogLevel::Info
            }),
        };

        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                body_limit_bytes,
            },
            mongodb_uri,
            rate_limit: RateLimitConfig {
                window: Duration::from_millis(window_ms),
                max_requests,
            },
            log_level,
        })
    }

    /// 서버 바인딩 주소 (`host:port`)
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 숫자 설정값을 파싱하고 최소값을 검사합니다.
///
/// 값이 없으면 기본값을, 파싱 실패 또는 최소값 미만이면
/// `problems`에 사유를 기록하고 기본값을 반환합니다.
fn read_number<T>(raw: Option<String>, key: &str, default: T, min: T, problems: &mut Vec<String>) -> T
where
    T: FromStr + PartialOrd + Copy + Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse::<T>() {
        Ok(value) if value >= min => value,
        Ok(value) => {
            problems.push(format!("{} must be at least {} (got {})", key, min, value));
            default
        }
        Err(_) => {
            problems.push(format!("{} must be a number (got '{}')", key, raw));
            default
        }
    }
}
