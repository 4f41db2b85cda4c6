//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@ConfigurationProperties`와 유사하게
//! 환경 변수 기반의 설정값을 시작 시점에 한 번 읽고 검증합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 시작 시점 검증 (Fail Fast)
//!
//! 모든 설정값은 서버가 포트를 열기 전에 검증됩니다.
//! 잘못된 값이 하나라도 있으면 프로세스는 상태 코드 1로 즉시 종료됩니다.
//!
//! ### 2. 환경 분리 (Environment Separation)
//!
//! `development`, `test`, `production` 환경을 구분합니다.
//! 에러 응답의 상세 수준과 CORS 정책이 환경에 따라 달라집니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("{} 모드, 포트 {}", config.environment.as_str(), config.server.port);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export NODE_ENV="production"      # development, test, production
//! export PORT="3000"
//! export MONGODB_URI="mongodb://localhost:27017/user_service"
//! export RATE_LIMIT_WINDOW_MS="900000"
//! export RATE_LIMIT_MAX="100"
//! export LOG_LEVEL="info"           # error, warn, info, http, verbose, debug, silly
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@ConfigurationProperties` | `AppConfig` 구조체 |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `@Validated` 설정 바인딩 | `AppConfig::from_lookup` 검증 |

pub mod app_config;

pub use app_config::*;
