//! 서비스 조립
//!
//! 설정 → 코덱 → 레지스트리 → 세션 매니저 → 인증 게이트 → 계정 서비스 순서로
//! 시작 시 한 번 구성합니다. 레지스트리는 컨텍스트와 같은 수명을 가집니다.

use std::sync::Arc;

use crate::config::{load_env_file, JwtConfig};
use crate::errors::AppResult;
use crate::repositories::tokens::RevocationRegistry;
use crate::repositories::users::{InMemoryUserStore, UserStore};
use crate::services::auth::{AuthGate, BcryptPasswordHasher, CredentialCodec, PasswordHasher, SessionManager};
use crate::services::users::AccountService;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::logging::init_logging;

/// 조립된 서비스 묶음
///
/// 각 구성 요소는 `Arc`로 공유되므로 호스트는 필요한 것만 꺼내 복제해 쓰면 됩니다.
pub struct AuthContext {
    registry: Arc<RevocationRegistry>,
    sessions: Arc<SessionManager>,
    gate: Arc<AuthGate>,
    accounts: Arc<AccountService>,
}

impl AuthContext {
    /// 주어진 설정과 협력자로 컨텍스트를 구성합니다.
    pub fn new(
        config: &JwtConfig,
        clock: Arc<dyn Clock>,
        hasher: Arc<dyn PasswordHasher>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        let codec = Arc::new(CredentialCodec::new(config, clock));
        let registry = Arc::new(RevocationRegistry::new());
        let sessions = Arc::new(SessionManager::new(codec.clone(), registry.clone()));
        let gate = Arc::new(AuthGate::new(codec.clone()));
        let accounts = Arc::new(AccountService::new(users, hasher, sessions.clone(), gate.clone()));

        log::info!("인증 컨텍스트 구성 완료: {:?}", codec);

        Self {
            registry,
            sessions,
            gate,
            accounts,
        }
    }

    /// 환경에서 설정을 읽어 기본 협력자(bcrypt, 메모리 저장소)로 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 프로덕션 계열 환경에서 서명 키 누락 또는 동일
    pub fn bootstrap() -> AppResult<Self> {
        load_env_file();
        init_logging();

        log::info!("🚀 인증 세션 코어 시작중...");

        let config = JwtConfig::from_env()?;
        let context = Self::new(
            &config,
            Arc::new(SystemClock),
            Arc::new(BcryptPasswordHasher::from_env()),
            Arc::new(InMemoryUserStore::new()),
        );

        log::info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");
        Ok(context)
    }

    pub fn registry(&self) -> Arc<RevocationRegistry> {
        self.registry.clone()
    }

    pub fn sessions(&self) -> Arc<SessionManager> {
        self.sessions.clone()
    }

    pub fn gate(&self) -> Arc<AuthGate> {
        self.gate.clone()
    }

    pub fn accounts(&self) -> Arc<AccountService> {
        self.accounts.clone()
    }
}
