//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 토큰 수명주기 엔진과 계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 두 계층으로 나뉩니다:
//!
//! - [`TokenError`] - 자격 증명(credential) 코덱, 세션 매니저, 인증 게이트의 닫힌 에러 분류
//! - [`AppError`] - 계정 흐름(회원가입/로그인 등)과 설정 계층의 에러
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, TokenError};
//!
//! fn refresh(manager: &SessionManager, token: &str) -> Result<TokenPair, AppError> {
//!     // TokenError는 AppError로 자동 변환됩니다
//!     Ok(manager.rotate(token)?)
//! }
//! ```

use thiserror::Error;

/// 토큰 수명주기 에러 타입
///
/// 코덱 수준의 에러(`Malformed`, `SignatureInvalid`, `Expired`, `TypeMismatch`)는
/// `rotate`를 통해 그대로 전파되고, 인증 게이트에서는 모두 `Unauthenticated`로 합쳐집니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 구조적으로 잘못된 자격 증명 (잘림, 인코딩 오류, 클레임 누락)
    #[error("Malformed credential")]
    Malformed,

    /// 서명 불일치 (변조되었거나 다른 키로 서명됨)
    #[error("Credential signature is invalid")]
    SignatureInvalid,

    /// 만료 시간 경과
    #[error("Credential has expired")]
    Expired,

    /// 기대한 토큰 종류와 다름 (access ↔ refresh)
    #[error("Credential type mismatch")]
    TypeMismatch,

    /// 리프레시 토큰 ID가 레지스트리에 없음 (폐기되었거나 발급된 적 없음)
    #[error("Refresh credential has been revoked")]
    Revoked,

    /// 인증 게이트의 단일 거부 응답
    #[error("Unauthenticated")]
    Unauthenticated,

    /// 서명 인프라 실패 (서명 키 누락 등 치명적 설정 오류)
    #[error("Credential issuance failed: {0}")]
    IssuanceFailed(String),
}

/// 애플리케이션 전역 에러 타입
///
/// 계정 서비스와 설정 계층에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
/// HTTP 전송 계층은 이 크레이트의 범위 밖이므로, 상태 코드 매핑은
/// [`AppError::status_code`]로만 노출합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 설정 누락/오류 (시작 실패)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 호스트 전송 계층이 사용할 HTTP 상태 코드를 반환합니다.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::ValidationError(_) => 400,
            AppError::ConflictError(_) => 409,
            AppError::AuthenticationError(_) => 401,
            _ => 500,
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::IssuanceFailed(_) => AppError::InternalError(err.to_string()),
            _ => AppError::AuthenticationError(err.to_string()),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
