//! 실행 환경 및 패스워드 해싱 설정 관리 모듈

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 실행 환경을 결정합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 서명 키 누락을 시작 실패로 취급해야 하는 환경인지 확인합니다.
    pub fn is_production_like(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을 우선 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        let cost_override = env::var("BCRYPT_COST").ok();
        Self::resolve_bcrypt_cost(&Environment::current(), cost_override.as_deref())
    }

    /// `BCRYPT_COST` 값(있다면)과 환경으로 cost를 결정합니다.
    pub fn resolve_bcrypt_cost(env: &Environment, cost_override: Option<&str>) -> u32 {
        if let Some(cost_str) = cost_override {
            if let Ok(cost) = cost_str.trim().parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다 ({}). 환경 기본값을 사용합니다.", cost_str);
        }

        Self::bcrypt_cost_for_env(env)
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_production_like_environments() {
        assert!(Environment::Production.is_production_like());
        assert!(Environment::Staging.is_production_like());
        assert!(!Environment::Development.is_production_like());
        assert!(!Environment::Test.is_production_like());
    }

    #[test]
    fn test_environment_defaults_to_production() {
        assert_eq!(Environment::from_lookup(|_| None), Environment::Production);
    }

    #[test]
    fn test_environment_lookup_order() {
        let env = Environment::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("staging".to_string()),
            "NODE_ENV" => Some("development".to_string()),
            _ => None,
        });
        assert_eq!(env, Environment::Staging);

        let env = Environment::from_lookup(|key| (key == "NODE_ENV").then(|| "test".to_string()));
        assert_eq!(env, Environment::Test);
    }

    #[test]
    fn test_bcrypt_cost_override() {
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(&Environment::Production, Some("8")), 8);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(&Environment::Development, Some(" 15 ")), 15);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(&Environment::Production, None), 12);
    }

    #[test]
    fn test_bcrypt_cost_invalid_override_falls_back() {
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(&Environment::Production, Some("3")), 12);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(&Environment::Staging, Some("16")), 10);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(&Environment::Test, Some("fast")), 4);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }
}
