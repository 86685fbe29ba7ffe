//! 인증 게이트
//!
//! 보호된 작업 앞에서 액세스 토큰을 검증하고 주체(subject)를 돌려줍니다.
//! 액세스 토큰은 폐기할 수 없으므로 레지스트리를 조회하지 않습니다.
//! 거부 사유는 로그에만 남기고 호출자에게는 항상 `Unauthenticated` 하나만 보고합니다.

use std::sync::Arc;

use crate::domain::models::token::token::TokenType;
use crate::errors::TokenError;
use crate::services::auth::credential_codec::CredentialCodec;

const BEARER_SCHEME: &str = "bearer";

#[derive(Debug, Clone)]
pub struct AuthGate {
    codec: Arc<CredentialCodec>,
}

impl AuthGate {
    pub fn new(codec: Arc<CredentialCodec>) -> Self {
        Self { codec }
    }

    /// 액세스 토큰을 검증하고 주체를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Unauthenticated` - 모든 검증 실패
    pub fn authenticate(&self, access_token: &str) -> Result<String, TokenError> {
        self.codec
            .decode(access_token, TokenType::Access)
            .map(|claims| claims.sub)
            .map_err(|e| {
                log::debug!("인증 거부: {}", e);
                TokenError::Unauthenticated
            })
    }

    /// `Authorization` 헤더 값 전체를 받아 인증합니다.
    ///
    /// ```rust,ignore
    /// let subject = gate.authenticate_bearer("Bearer eyJhbGciOiJIUzI1NiIs...")?;
    /// ```
    pub fn authenticate_bearer(&self, auth_header: &str) -> Result<String, TokenError> {
        let token = Self::extract_bearer_token(auth_header)?;
        self.authenticate(token)
    }

    /// "Bearer {token}" 형식에서 토큰 부분을 추출합니다. 스킴은 대소문자를 구분하지 않습니다.
    pub fn extract_bearer_token(auth_header: &str) -> Result<&str, TokenError> {
        let (scheme, token) = auth_header
            .trim()
            .split_once(' ')
            .ok_or(TokenError::Unauthenticated)?;

        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            log::debug!("지원하지 않는 인증 스킴: {}", scheme);
            return Err(TokenError::Unauthenticated);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Unauthenticated);
        }
        Ok(token)
    }
}
