//! 클라이언트 IP 기준 Rate Limiting
//!
//! `RATE_LIMIT_WINDOW_MS` 동안 `RATE_LIMIT_MAX`개의 요청을 허용하는 토큰 버킷입니다.
//! 버킷은 워커 간에 공유되어야 하므로 서버 시작 시 한 번만 만듭니다.
//! 거부된 요청(429)의 본문은 `ErrorNormalizer`가 만듭니다.

use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

use crate::config::RateLimitConfig;
use crate::errors::{AppError, AppResult};

pub type RateLimiter = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// `x-ratelimit-*` 헤더를 포함하는 Rate Limiter를 만듭니다.
pub fn build_rate_limiter(config: &RateLimitConfig) -> AppResult<RateLimiter> {
    GovernorConfigBuilder::default()
        .period(config.replenish_period())
        .burst_size(config.max_requests.max(1))
        .use_headers()
        .finish()
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid rate limit: {} requests per {:?}",
                config.max_requests, config.window
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rate_limiter_builds_from_config() {
        let config = RateLimitConfig {
            window: Duration::from_millis(900_000),
            max_requests: 100,
        };
        assert!(build_rate_limiter(&config).is_ok());
    }
}
