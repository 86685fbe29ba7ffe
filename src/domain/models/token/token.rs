//! JWT 클레임 구조체 및 페어링 된 토큰 세트
//!
//! 두 종류의 토큰(access / refresh)을 `type` 클레임으로 구분하고,
//! 클라이언트에 전달되는 토큰 쌍 형식을 정의합니다.
use std::fmt;

use serde::{Deserialize, Serialize};

/// 토큰 종류
///
/// 문자열 비교 대신 닫힌 열거형으로 표현하여 모든 분기를 컴파일러가 검사합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// 단기 액세스 토큰 (상태 없음, 폐기 불가)
    Access,
    /// 장기 리프레시 토큰 (레지스트리에 등록된 동안만 유효)
    Refresh,
}

impl TokenType {
    /// 반대 종류의 토큰 타입
    pub fn other(self) -> Self {
        match self {
            TokenType::Access => TokenType::Refresh,
            TokenType::Refresh => TokenType::Access,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `type`: 토큰 종류 (`access` | `refresh`)
/// - `jti`: 토큰 고유 ID. 리프레시 토큰에서는 폐기 레지스트리의 키로 사용됩니다
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이메일)
    pub sub: String,
    /// 토큰 종류
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// 토큰 고유 ID
    pub jti: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합입니다. OAuth 2.0 토큰 응답 형식을 따르며,
/// 저장되지 않고 발급/갱신 때마다 새로 만들어집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 항상 `"bearer"`
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl TokenPair {
    pub const BEARER: &'static str = "bearer";

    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: Self::BEARER.to_string(),
            expires_in,
        }
    }
}
