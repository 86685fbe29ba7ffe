//! # Authentication Configuration Module
//!
//! 액세스/리프레시 토큰 서명 키와 수명(TTL)을 관리하는 모듈입니다.
//!
//! 액세스 토큰과 리프레시 토큰은 **서로 다른 서명 키**를 사용합니다.
//! 한쪽 키가 유출되더라도 다른 종류의 토큰을 위조할 수 없습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_ACCESS_SECRET="access-signing-secret"
//! export JWT_REFRESH_SECRET="refresh-signing-secret"
//! export JWT_ACCESS_EXPIRATION_MINUTES="15"
//! export JWT_REFRESH_EXPIRATION_DAYS="30"
//! ```
//!
//! ## 환경별 동작
//!
//! | 환경 | 키 누락 | 두 키가 동일 |
//! |------|---------|-------------|
//! | Development / Test | 경고 후 개발용 기본값 사용 | 경고 |
//! | Staging / Production | `ConfigurationError` | `ConfigurationError` |
//!
//! ## 키 생성 예제
//!
//! ```bash
//! openssl rand -base64 32
//! ```

use std::env;
use std::fmt;

use chrono::Duration;

use crate::config::Environment;
use crate::errors::{AppError, AppResult};

const ACCESS_SECRET_VAR: &str = "JWT_ACCESS_SECRET";
const REFRESH_SECRET_VAR: &str = "JWT_REFRESH_SECRET";
const ACCESS_EXPIRATION_VAR: &str = "JWT_ACCESS_EXPIRATION_MINUTES";
const REFRESH_EXPIRATION_VAR: &str = "JWT_REFRESH_EXPIRATION_DAYS";

const DEV_ACCESS_SECRET: &str = "dev-access-secret-not-for-production";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-not-for-production";

/// JWT 서명 및 만료 설정
///
/// 서비스 시작 시 한 번 생성되어 [`CredentialCodec`](crate::services::auth::CredentialCodec)에 전달됩니다.
#[derive(Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명 키 (빈 문자열이면 키 없음으로 취급)
    pub access_secret: String,
    /// 리프레시 토큰 서명 키
    pub refresh_secret: String,
    /// 액세스 토큰 수명
    pub access_ttl: Duration,
    /// 리프레시 토큰 수명
    pub refresh_ttl: Duration,
}

impl JwtConfig {
    /// 액세스 토큰 기본 수명 (분)
    pub const DEFAULT_ACCESS_EXPIRATION_MINUTES: i64 = 15;
    /// 리프레시 토큰 기본 수명 (일)
    pub const DEFAULT_REFRESH_EXPIRATION_DAYS: i64 = 30;
    /// 액세스 토큰 최대 수명 (분, 1일)
    pub const MAX_ACCESS_EXPIRATION_MINUTES: i64 = 24 * 60;
    /// 리프레시 토큰 최대 수명 (일, 1년)
    pub const MAX_REFRESH_EXPIRATION_DAYS: i64 = 365;

    /// 주어진 키와 기본 수명(15분 / 30일)으로 설정을 생성합니다.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::minutes(Self::DEFAULT_ACCESS_EXPIRATION_MINUTES),
            refresh_ttl: Duration::days(Self::DEFAULT_REFRESH_EXPIRATION_DAYS),
        }
    }

    /// 토큰 수명을 변경합니다.
    pub fn with_ttls(mut self, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        self.access_ttl = access_ttl;
        self.refresh_ttl = refresh_ttl;
        self
    }

    /// 프로세스 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 프로덕션 계열 환경에서 키 누락 또는 두 키가 동일
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&Environment::current(), |key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 로드합니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap` 등을 주입합니다.
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_secret = resolve_secret(environment, &lookup, ACCESS_SECRET_VAR, DEV_ACCESS_SECRET)?;
        let refresh_secret = resolve_secret(environment, &lookup, REFRESH_SECRET_VAR, DEV_REFRESH_SECRET)?;

        if access_secret == refresh_secret {
            if environment.is_production_like() {
                return Err(AppError::ConfigurationError(format!(
                    "{} and {} must be distinct",
                    ACCESS_SECRET_VAR, REFRESH_SECRET_VAR
                )));
            }
            log::warn!("액세스/리프레시 서명 키가 동일합니다. 프로덕션에서는 허용되지 않습니다.");
        }

        let access_minutes = parse_bounded(
            &lookup,
            ACCESS_EXPIRATION_VAR,
            Self::DEFAULT_ACCESS_EXPIRATION_MINUTES,
            Self::MAX_ACCESS_EXPIRATION_MINUTES,
        );
        let refresh_days = parse_bounded(
            &lookup,
            REFRESH_EXPIRATION_VAR,
            Self::DEFAULT_REFRESH_EXPIRATION_DAYS,
            Self::MAX_REFRESH_EXPIRATION_DAYS,
        );

        let config = Self {
            access_secret,
            refresh_secret,
            access_ttl: Duration::minutes(access_minutes),
            refresh_ttl: Duration::days(refresh_days),
        };

        log::info!("JWT 설정 로드됨: {:?}", config);
        Ok(config)
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_ttl_seconds", &self.access_ttl.num_seconds())
            .field("refresh_ttl_seconds", &self.refresh_ttl.num_seconds())
            .finish()
    }
}

fn resolve_secret<F>(
    environment: &Environment,
    lookup: &F,
    var: &str,
    dev_default: &str,
) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var).filter(|value| !value.trim().is_empty()) {
        Some(secret) => Ok(secret),
        None if environment.is_production_like() => {
            log::error!("{} 가 설정되지 않았습니다 ({:?} 환경)", var, environment);
            Err(AppError::ConfigurationError(format!("{} must be set", var)))
        }
        None => {
            log::warn!("{} not set, using default (not secure for production!)", var);
            Ok(dev_default.to_string())
        }
    }
}

/// `1..=max` 범위의 정수만 받고, 그 외에는 에러 로그 후 기본값을 사용합니다.
fn parse_bounded<F>(lookup: &F, var: &str, default: i64, max: i64) -> i64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => default,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) if (1..=max).contains(&value) => value,
            _ => {
                log::error!("{} 값이 유효하지 않습니다 (1..={}): {:?}. 기본값 {} 사용", var, max, raw, default);
                default
            }
        },
    }
}
