//! 인증 요청관련 DTO
//!
//! 회원가입, 로그인, 토큰 갱신/로그아웃 요청 정보를 매핑하고 검증합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자, 영문자와 숫자 각각 1개 이상)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체 (갱신/로그아웃 공용)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 비밀번호 강도 검증 (영문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 최소 하나의 영문자를 포함해야 합니다".into()));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 최소 하나의 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
