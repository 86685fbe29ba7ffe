//! 자격 증명(JWT) 코덱
//!
//! HMAC-SHA256으로 서명된 자체 완결형 토큰을 생성하고 검증합니다.
//! 액세스 토큰과 리프레시 토큰은 서로 다른 키로 서명되며, 키는 `type` 클레임으로 선택됩니다.
//!
//! ## 검증 순서
//!
//! 1. 구조 (세 개의 base64url 세그먼트, JSON 클레임) - [`TokenError::Malformed`]
//! 2. 서명 - [`TokenError::SignatureInvalid`]. 반대 종류의 키로 검증되는 토큰은
//!    이 서비스가 서명한 것이므로 만료 확인 후 [`TokenError::TypeMismatch`]로 보고합니다
//! 3. 만료 (`exp > now`) - [`TokenError::Expired`]
//! 4. 종류 (`type == expected`) - [`TokenError::TypeMismatch`]
//!
//! 만료는 `jsonwebtoken`의 기본 검증(leeway 포함) 대신 주입된 [`Clock`]으로 직접 검사합니다.

use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::models::token::token::{TokenClaims, TokenType};
use crate::errors::TokenError;
use crate::utils::clock::Clock;
use crate::utils::string_utils::mask_identifier;

/// 한 종류의 토큰에 대한 서명/검증 키 쌍
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    /// 빈 키는 "키 없음"으로 취급합니다.
    fn from_secret(secret: &str) -> Option<Self> {
        if secret.is_empty() {
            return None;
        }
        Some(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }
}

/// 서명된 토큰과 그 안에 담긴 클레임
#[derive(Debug, Clone)]
pub struct EncodedCredential {
    pub token: String,
    pub claims: TokenClaims,
}

/// JWT 코덱
///
/// 상태가 없으며 서비스 시작 시 한 번 생성되어 `Arc`로 공유됩니다.
pub struct CredentialCodec {
    access_keys: Option<SigningKeys>,
    refresh_keys: Option<SigningKeys>,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
    /// 서명 검증용 (HS256, 만료는 직접 검사)
    validation: Validation,
    /// 구조 검사용 (서명 검증 비활성화)
    structure_validation: Validation,
    structure_key: DecodingKey,
}

impl CredentialCodec {
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let mut structure_validation = validation.clone();
        structure_validation.insecure_disable_signature_validation();

        let access_keys = SigningKeys::from_secret(&config.access_secret);
        let refresh_keys = SigningKeys::from_secret(&config.refresh_secret);
        if access_keys.is_none() || refresh_keys.is_none() {
            log::warn!(
                "서명 키 누락 - access: {}, refresh: {}. 해당 종류의 토큰 발급은 실패합니다",
                access_keys.is_some(),
                refresh_keys.is_some()
            );
        }

        Self {
            access_keys,
            refresh_keys,
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
            clock,
            validation,
            structure_validation,
            structure_key: DecodingKey::from_secret(&[]),
        }
    }

    /// 토큰 종류별 수명
    pub fn ttl(&self, token_type: TokenType) -> Duration {
        match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        }
    }

    /// 클라이언트에 전달되는 `expires_in` (액세스 토큰 수명, 초)
    pub fn access_expires_in(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// 주체(subject)에 대한 토큰을 생성합니다.
    ///
    /// 새로운 `jti`를 생성하고 `exp = now + ttl(type)`으로 설정한 뒤
    /// 종류에 맞는 키로 서명합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::IssuanceFailed` - 해당 종류의 서명 키가 없거나, 만료 시각이 표현 범위를 넘거나, 서명 실패
    pub fn encode(&self, subject: &str, token_type: TokenType) -> Result<EncodedCredential, TokenError> {
        let keys = self.keys(token_type).ok_or_else(|| {
            log::error!("{} 서명 키가 설정되지 않았습니다", token_type);
            TokenError::IssuanceFailed(format!("{} signing key is not configured", token_type))
        })?;

        let now = self.clock.now();
        let expires_at = now.checked_add_signed(self.ttl(token_type)).ok_or_else(|| {
            log::error!("{} 토큰 만료 시각 계산 실패 - ttl: {:?}", token_type, self.ttl(token_type));
            TokenError::IssuanceFailed(format!("{} token expiry is out of range", token_type))
        })?;

        let claims = TokenClaims {
            sub: subject.to_string(),
            token_type,
            jti: new_token_id(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| TokenError::IssuanceFailed(format!("{} token signing failed: {}", token_type, e)))?;

        log::debug!(
            "{} 토큰 생성 - jti: {}, exp: {}",
            token_type,
            mask_identifier(&claims.jti),
            claims.exp
        );
        Ok(EncodedCredential { token, claims })
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// 모듈 문서의 검증 순서대로 첫 번째 실패를 반환합니다.
    pub fn decode(&self, token: &str, expected_type: TokenType) -> Result<TokenClaims, TokenError> {
        let (claims, signed_as) = self.verify(token, expected_type)?;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(TokenError::Expired);
        }

        ensure_type(&claims, signed_as, expected_type)?;
        Ok(claims)
    }

    /// 만료를 무시하고 구조, 서명, 종류만 검증합니다.
    ///
    /// 로그아웃처럼 만료된 토큰도 식별해야 하는 경우에 사용합니다.
    pub fn inspect(&self, token: &str, expected_type: TokenType) -> Result<TokenClaims, TokenError> {
        let (claims, signed_as) = self.verify(token, expected_type)?;
        ensure_type(&claims, signed_as, expected_type)?;
        Ok(claims)
    }

    /// 구조와 서명을 검증하고, 토큰이 어느 종류의 키로 서명되었는지 함께 반환합니다.
    fn verify(&self, token: &str, expected_type: TokenType) -> Result<(TokenClaims, TokenType), TokenError> {
        decode::<TokenClaims>(token, &self.structure_key, &self.structure_validation).map_err(|e| {
            log::debug!("토큰 구조 오류: {}", e);
            TokenError::Malformed
        })?;

        match self.verify_with(token, expected_type) {
            Ok(claims) => Ok((claims, expected_type)),
            Err(TokenError::SignatureInvalid) => {
                let other = expected_type.other();
                match self.verify_with(token, other) {
                    Ok(claims) => Ok((claims, other)),
                    Err(_) => Err(TokenError::SignatureInvalid),
                }
            }
            Err(e) => Err(e),
        }
    }

    fn verify_with(&self, token: &str, key_type: TokenType) -> Result<TokenClaims, TokenError> {
        let keys = self.keys(key_type).ok_or(TokenError::SignatureInvalid)?;
        decode::<TokenClaims>(token, &keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)
    }

    fn keys(&self, token_type: TokenType) -> Option<&SigningKeys> {
        match token_type {
            TokenType::Access => self.access_keys.as_ref(),
            TokenType::Refresh => self.refresh_keys.as_ref(),
        }
    }
}

impl fmt::Debug for CredentialCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialCodec")
            .field("access_key_configured", &self.access_keys.is_some())
            .field("refresh_key_configured", &self.refresh_keys.is_some())
            .field("access_ttl_seconds", &self.access_ttl.num_seconds())
            .field("refresh_ttl_seconds", &self.refresh_ttl.num_seconds())
            .finish()
    }
}

fn ensure_type(claims: &TokenClaims, signed_as: TokenType, expected_type: TokenType) -> Result<(), TokenError> {
    if signed_as != expected_type || claims.token_type != expected_type {
        log::debug!("토큰 종류 불일치 - expected: {}, got: {}", expected_type, claims.token_type);
        return Err(TokenError::TypeMismatch);
    }
    Ok(())
}

fn classify(error: JwtError) -> TokenError {
    match error.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::SignatureInvalid,
        _ => TokenError::Malformed,
    }
}

/// 122비트 무작위 토큰 ID
fn new_token_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;

    const ACCESS_SECRET: &str = "test-access-secret";
    const REFRESH_SECRET: &str = "test-refresh-secret";

    fn codec_with_clock() -> (CredentialCodec, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_now());
        let config = JwtConfig::new(ACCESS_SECRET, REFRESH_SECRET);
        (CredentialCodec::new(&config, clock.clone()), clock)
    }

    fn forge(claims: &serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_encode_then_decode() {
        let (codec, clock) = codec_with_clock();
        let encoded = codec.encode("a@x.com", TokenType::Access).unwrap();
        let claims = codec.decode(&encoded.token, TokenType::Access).unwrap();

        assert_eq!(claims, encoded.claims);
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.iat, clock.now().timestamp());
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert_eq!(claims.jti.len(), 32);
    }

    #[test]
    fn test_refresh_ttl_is_thirty_days() {
        let (codec, _) = codec_with_clock();
        let encoded = codec.encode("a@x.com", TokenType::Refresh).unwrap();

        assert_eq!(encoded.claims.exp - encoded.claims.iat, 30 * 24 * 60 * 60);
        assert_eq!(codec.access_expires_in(), 900);
    }

    #[test]
    fn test_token_ids_are_unique() {
        let (codec, _) = codec_with_clock();
        let first = codec.encode("a@x.com", TokenType::Refresh).unwrap();
        let second = codec.encode("a@x.com", TokenType::Refresh).unwrap();

        assert_ne!(first.claims.jti, second.claims.jti);
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn test_expiry_is_strict() {
        let (codec, clock) = codec_with_clock();
        let encoded = codec.encode("a@x.com", TokenType::Access).unwrap();

        clock.advance(Duration::minutes(15) - Duration::seconds(1));
        assert!(codec.decode(&encoded.token, TokenType::Access).is_ok());

        clock.advance(Duration::seconds(1));
        assert_eq!(codec.decode(&encoded.token, TokenType::Access), Err(TokenError::Expired));
    }

    #[test]
    fn test_type_mismatch_both_directions() {
        let (codec, _) = codec_with_clock();
        let access = codec.encode("a@x.com", TokenType::Access).unwrap();
        let refresh = codec.encode("a@x.com", TokenType::Refresh).unwrap();

        assert_eq!(codec.decode(&access.token, TokenType::Refresh), Err(TokenError::TypeMismatch));
        assert_eq!(codec.decode(&refresh.token, TokenType::Access), Err(TokenError::TypeMismatch));
    }

    #[test]
    fn test_expired_token_of_other_type_reports_expired() {
        let (codec, clock) = codec_with_clock();
        let access = codec.encode("a@x.com", TokenType::Access).unwrap();

        clock.advance(Duration::hours(1));
        assert_eq!(codec.decode(&access.token, TokenType::Refresh), Err(TokenError::Expired));
    }

    #[test]
    fn test_type_claim_disagreeing_with_key_is_mismatch() {
        let (codec, clock) = codec_with_clock();
        let exp = (clock.now() + Duration::minutes(5)).timestamp();
        let claims = serde_json::json!({
            "sub": "a@x.com", "type": "refresh", "jti": "x", "iat": 0, "exp": exp
        });
        let token = forge(&claims, ACCESS_SECRET);

        assert_eq!(codec.decode(&token, TokenType::Access), Err(TokenError::TypeMismatch));
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let (codec, clock) = codec_with_clock();
        let exp = (clock.now() + Duration::minutes(5)).timestamp();
        let claims = serde_json::json!({
            "sub": "a@x.com", "type": "access", "jti": "x", "iat": 0, "exp": exp
        });
        let token = forge(&claims, "attacker-secret");

        assert_eq!(codec.decode(&token, TokenType::Access), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let (codec, _) = codec_with_clock();
        let token = codec.encode("a@x.com", TokenType::Access).unwrap().token;

        let sig_start = token.rfind('.').unwrap() + 1;
        let mut bytes = token.into_bytes();
        bytes[sig_start] = if bytes[sig_start] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(codec.decode(&tampered, TokenType::Access), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_structural_errors_are_malformed() {
        let (codec, clock) = codec_with_clock();

        assert_eq!(codec.decode("", TokenType::Access), Err(TokenError::Malformed));
        assert_eq!(codec.decode("not-a-token", TokenType::Access), Err(TokenError::Malformed));
        assert_eq!(codec.decode("a.b.c", TokenType::Access), Err(TokenError::Malformed));

        let token = codec.encode("a@x.com", TokenType::Access).unwrap().token;
        let truncated = &token[..token.rfind('.').unwrap()];
        assert_eq!(codec.decode(truncated, TokenType::Access), Err(TokenError::Malformed));

        // 서명은 유효하지만 필수 클레임이 없음
        let exp = (clock.now() + Duration::minutes(5)).timestamp();
        let missing_type = serde_json::json!({ "sub": "a@x.com", "jti": "x", "iat": 0, "exp": exp });
        let token = forge(&missing_type, ACCESS_SECRET);
        assert_eq!(codec.decode(&token, TokenType::Access), Err(TokenError::Malformed));

        let unknown_type = serde_json::json!({
            "sub": "a@x.com", "type": "id", "jti": "x", "iat": 0, "exp": exp
        });
        let token = forge(&unknown_type, "attacker-secret");
        assert_eq!(codec.decode(&token, TokenType::Access), Err(TokenError::Malformed));
    }

    #[test]
    fn test_inspect_ignores_expiry() {
        let (codec, clock) = codec_with_clock();
        let refresh = codec.encode("a@x.com", TokenType::Refresh).unwrap();

        clock.advance(Duration::days(31));
        assert_eq!(codec.decode(&refresh.token, TokenType::Refresh), Err(TokenError::Expired));
        assert_eq!(codec.inspect(&refresh.token, TokenType::Refresh).unwrap(), refresh.claims);
    }

    #[test]
    fn test_missing_key_fails_issuance() {
        let clock = Arc::new(ManualClock::starting_now());
        let codec = CredentialCodec::new(&JwtConfig::new("access-only", ""), clock);

        assert!(codec.encode("a@x.com", TokenType::Access).is_ok());
        assert!(matches!(
            codec.encode("a@x.com", TokenType::Refresh),
            Err(TokenError::IssuanceFailed(_))
        ));
    }

    #[test]
    fn test_unrepresentable_expiry_fails_issuance() {
        let clock = Arc::new(ManualClock::starting_now());
        let config = JwtConfig::new(ACCESS_SECRET, REFRESH_SECRET)
            .with_ttls(Duration::minutes(15), Duration::days(100_000_000));
        let codec = CredentialCodec::new(&config, clock);

        assert!(codec.encode("a@x.com", TokenType::Access).is_ok());
        assert!(matches!(
            codec.encode("a@x.com", TokenType::Refresh),
            Err(TokenError::IssuanceFailed(_))
        ));
    }

    #[test]
    fn test_debug_does_not_expose_keys() {
        let (codec, _) = codec_with_clock();
        let rendered = format!("{:?}", codec);

        assert!(!rendered.contains(ACCESS_SECRET));
        assert!(rendered.contains("access_key_configured: true"));
    }
}
