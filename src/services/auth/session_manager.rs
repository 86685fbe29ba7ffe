//! 세션 수명주기 관리
//!
//! 토큰 쌍 발급(`issue`), 리프레시 토큰 회전(`rotate`), 로그아웃(`invalidate`)을 담당합니다.
//!
//! ## 리프레시 토큰 상태
//!
//! ```text
//! Issued --rotate 성공--> Issued(새 jti)
//! Issued --rotate, jti 없음--> Rejected(Revoked)
//! Issued --invalidate--> Revoked
//! Issued --ttl 경과--> Rejected(Expired)
//! ```
//!
//! ## 회전 순서
//!
//! 새 토큰 쌍을 먼저 발급하고(새 jti 등록) 그 다음 이전 jti를 원자적으로 폐기합니다.
//! 폐기 시점에 이전 jti가 이미 없으면 동시에 실행된 다른 회전이 이긴 것이므로,
//! 방금 등록한 jti를 다시 폐기하고 `Revoked`로 실패합니다.
//! 따라서 같은 리프레시 토큰으로 동시에 회전하면 정확히 하나만 성공합니다.
//!
//! 발급과 폐기 사이에 프로세스가 죽으면 두 리프레시 토큰이 모두 유효하게 남습니다
//! (폐기 쪽 fail-open, 발급 쪽 fail-closed).

use std::sync::Arc;

use crate::domain::models::token::token::{TokenPair, TokenType};
use crate::errors::TokenError;
use crate::repositories::tokens::RevocationRegistry;
use crate::services::auth::credential_codec::CredentialCodec;
use crate::utils::string_utils::mask_identifier;

/// 세션 매니저
///
/// 코덱과 레지스트리를 생성자로 주입받습니다. 레지스트리 외의 가변 상태는 없으므로
/// 여러 스레드에서 동시에 호출해도 됩니다.
#[derive(Debug, Clone)]
pub struct SessionManager {
    codec: Arc<CredentialCodec>,
    registry: Arc<RevocationRegistry>,
}

impl SessionManager {
    pub fn new(codec: Arc<CredentialCodec>, registry: Arc<RevocationRegistry>) -> Self {
        Self { codec, registry }
    }

    /// 주체에 대한 새 토큰 쌍을 발급하고 리프레시 토큰 ID를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::IssuanceFailed` - 서명 키 누락 등. 이 경우 아무것도 등록되지 않습니다
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = session_manager.issue("a@x.com")?;
    /// assert_eq!(pair.token_type, "bearer");
    /// ```
    pub fn issue(&self, subject: &str) -> Result<TokenPair, TokenError> {
        self.issue_pair(subject).map(|(pair, _)| pair)
    }

    /// 리프레시 토큰을 새 토큰 쌍으로 교환합니다. 이전 리프레시 토큰은 사용 불가가 됩니다.
    ///
    /// # Errors
    ///
    /// * 코덱 에러(`Malformed`, `SignatureInvalid`, `Expired`, `TypeMismatch`) - 그대로 전파
    /// * `TokenError::Revoked` - 이미 회전/로그아웃되었거나 동시 회전에서 패배
    /// * `TokenError::IssuanceFailed` - 새 토큰 발급 실패 (이전 토큰은 그대로 유효)
    pub fn rotate(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        let claims = self
            .codec
            .decode(refresh_token, TokenType::Refresh)
            .inspect_err(|e| log::warn!("리프레시 토큰 검증 실패: {}", e))?;

        if !self.registry.is_active(&claims.jti) {
            log::warn!(
                "폐기된 리프레시 토큰 사용 시도 - sub: {}, jti: {}",
                claims.sub,
                mask_identifier(&claims.jti)
            );
            return Err(TokenError::Revoked);
        }

        let (pair, new_jti) = self.issue_pair(&claims.sub)?;

        if !self.registry.revoke(&claims.jti) {
            self.registry.revoke(&new_jti);
            log::warn!(
                "동시 회전에서 패배, 새 토큰 폐기 - sub: {}, jti: {}",
                claims.sub,
                mask_identifier(&claims.jti)
            );
            return Err(TokenError::Revoked);
        }

        log::info!(
            "리프레시 토큰 회전 - sub: {}, {} -> {}",
            claims.sub,
            mask_identifier(&claims.jti),
            mask_identifier(&new_jti)
        );
        Ok(pair)
    }

    /// 리프레시 토큰을 폐기합니다 (로그아웃).
    ///
    /// 리프레시 키로 서명이 검증되는 토큰이면 만료 여부와 관계없이 ID를 폐기합니다.
    /// 그 외의 입력은 조용히 무시하며 항상 성공합니다.
    pub fn invalidate(&self, refresh_token: &str) {
        match self.codec.inspect(refresh_token, TokenType::Refresh) {
            Ok(claims) => {
                self.registry.revoke(&claims.jti);
                log::info!("로그아웃 - sub: {}, jti: {}", claims.sub, mask_identifier(&claims.jti));
            }
            Err(e) => log::debug!("로그아웃 요청 무시 ({})", e),
        }
    }

    fn issue_pair(&self, subject: &str) -> Result<(TokenPair, String), TokenError> {
        let access = self.codec.encode(subject, TokenType::Access)?;
        let refresh = self.codec.encode(subject, TokenType::Refresh)?;

        self.registry.register(&refresh.claims.jti);
        log::info!(
            "토큰 쌍 발급 - sub: {}, jti: {}",
            subject,
            mask_identifier(&refresh.claims.jti)
        );

        let pair = TokenPair::bearer(access.token, refresh.token, self.codec.access_expires_in());
        Ok((pair, refresh.claims.jti))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::utils::clock::{Clock, ManualClock};
    use chrono::Duration;

    struct Fixture {
        manager: SessionManager,
        codec: Arc<CredentialCodec>,
        registry: Arc<RevocationRegistry>,
        clock: Arc<ManualClock>,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(ManualClock::starting_now());
        let codec = Arc::new(CredentialCodec::new(
            &JwtConfig::new("access-key", "refresh-key"),
            clock.clone(),
        ));
        let registry = Arc::new(RevocationRegistry::new());
        Fixture {
            manager: SessionManager::new(codec.clone(), registry.clone()),
            codec,
            registry,
            clock,
        }
    }

    fn refresh_jti(f: &Fixture, refresh_token: &str) -> String {
        f.codec.decode(refresh_token, TokenType::Refresh).unwrap().jti
    }

    #[test]
    fn test_issue_registers_refresh_id() {
        let f = fixture();
        let pair = f.manager.issue("a@x.com").unwrap();

        assert_eq!(pair.token_type, "bearer");
        assert_eq!(pair.expires_in, 900);
        assert!(f.registry.is_active(&refresh_jti(&f, &pair.refresh_token)));
        assert_eq!(f.registry.active_count(), 1);
    }

    #[test]
    fn test_issue_without_refresh_key_registers_nothing() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::starting_now());
        let codec = Arc::new(CredentialCodec::new(&JwtConfig::new("access-key", ""), clock));
        let registry = Arc::new(RevocationRegistry::new());
        let manager = SessionManager::new(codec, registry.clone());

        assert!(matches!(manager.issue("a@x.com"), Err(TokenError::IssuanceFailed(_))));
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn test_issue_with_oversized_ttl_fails_without_panic() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::starting_now());
        let config = JwtConfig::new("access-key", "refresh-key")
            .with_ttls(Duration::minutes(15), Duration::days(100_000_000));
        let codec = Arc::new(CredentialCodec::new(&config, clock));
        let registry = Arc::new(RevocationRegistry::new());
        let manager = SessionManager::new(codec, registry.clone());

        assert!(matches!(manager.issue("a@x.com"), Err(TokenError::IssuanceFailed(_))));
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn test_rotate_is_single_use() {
        let f = fixture();
        let first = f.manager.issue("a@x.com").unwrap();

        let second = f.manager.rotate(&first.refresh_token).unwrap();
        assert_ne!(second.refresh_token, first.refresh_token);
        assert!(!f.registry.is_active(&refresh_jti(&f, &first.refresh_token)));
        assert!(f.registry.is_active(&refresh_jti(&f, &second.refresh_token)));

        assert_eq!(f.manager.rotate(&first.refresh_token), Err(TokenError::Revoked));
        assert_eq!(f.registry.active_count(), 1);
    }

    #[test]
    fn test_rotate_propagates_codec_errors() {
        let f = fixture();
        let pair = f.manager.issue("a@x.com").unwrap();

        assert_eq!(f.manager.rotate(&pair.access_token), Err(TokenError::TypeMismatch));
        assert_eq!(f.manager.rotate("garbage"), Err(TokenError::Malformed));

        f.clock.advance(Duration::days(30));
        assert_eq!(f.manager.rotate(&pair.refresh_token), Err(TokenError::Expired));
    }

    #[test]
    fn test_invalidate_then_rotate_is_revoked() {
        let f = fixture();
        let pair = f.manager.issue("a@x.com").unwrap();

        f.manager.invalidate(&pair.refresh_token);
        assert_eq!(f.manager.rotate(&pair.refresh_token), Err(TokenError::Revoked));
    }

    #[test]
    fn test_invalidate_is_best_effort() {
        let f = fixture();
        let pair = f.manager.issue("a@x.com").unwrap();

        f.manager.invalidate("garbage");
        f.manager.invalidate(&pair.access_token);
        assert_eq!(f.registry.active_count(), 1);

        f.manager.invalidate(&pair.refresh_token);
        f.manager.invalidate(&pair.refresh_token);
        assert_eq!(f.registry.active_count(), 0);
    }

    #[test]
    fn test_invalidate_accepts_expired_refresh_token() {
        let f = fixture();
        let pair = f.manager.issue("a@x.com").unwrap();

        f.clock.advance(Duration::days(31));
        f.manager.invalidate(&pair.refresh_token);
        assert_eq!(f.registry.active_count(), 0);
    }
}
