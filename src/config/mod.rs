//! # Configuration Module
//!
//! 토큰 엔진과 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 서명 키 및 토큰 수명 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 허용
//! - 프로덕션에서는 필수 설정값 누락 시 시작 실패
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{load_env_file, Environment, JwtConfig};
//!
//! load_env_file();
//! let env = Environment::current();
//! let jwt = JwtConfig::from_env()?;
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실패하지 않습니다. 프로세스 환경 변수만으로도 동작합니다.
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    log::info!("Current profile: {}", profile);

    let filename = env_file_for_profile(&profile);
    match dotenv::from_filename(filename) {
        Ok(_) => log::info!("{} 파일 로드 됨", filename),
        Err(e) => log::warn!("{} 파일 로드 실패: {}", filename, e),
    }
}

/// 프로필에 해당하는 .env 파일 이름
fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}
