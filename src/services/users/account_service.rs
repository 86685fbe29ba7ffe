//! # 계정 서비스
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃, 현재 사용자 조회를 조율합니다.
//!
//! ```text
//! AccountService
//!   ├── UserStore        (사용자 영속화 협력자)
//!   ├── PasswordHasher   (비밀번호 해싱 협력자)
//!   ├── SessionManager   (issue / rotate / invalidate)
//!   └── AuthGate         (authenticate)
//! ```
//!
//! 로그인 실패 시 이메일이 없는 경우와 비밀번호가 틀린 경우를 구분하지 않고
//! 같은 메시지를 반환합니다.

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::users::auth_request::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::domain::entities::users::user::UserRecord;
use crate::domain::models::token::token::TokenPair;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::{AuthGate, PasswordHasher, SessionManager};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<SessionManager>,
    gate: Arc<AuthGate>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<SessionManager>,
        gate: Arc<AuthGate>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
            gate,
        }
    }

    /// 신규 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 형식 또는 비밀번호 강도 위반
    /// * `AppError::ConflictError` - 이미 등록된 이메일
    /// * `AppError::InternalError` - 해싱 실패 또는 저장소가 생성을 거부
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserRecord> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if self.users.find_user(&request.email).await.is_some() {
            log::warn!("중복 이메일 가입 시도 - email: {}", request.email);
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = self
            .users
            .create_user(&request.email, &password_hash)
            .await
            .ok_or_else(|| AppError::InternalError("Failed to create user".to_string()))?;

        log::info!("회원가입 완료 - email: {}, id: {}", user.email, user.id);
        Ok(user)
    }

    /// 이메일/비밀번호 로그인 후 토큰 쌍 발급
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 이메일이 없거나 비밀번호 불일치
    /// * `AppError::InternalError` - 토큰 발급 실패
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenPair> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user = match self.users.find_user(&request.email).await {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 (알 수 없는 이메일) - email: {}", request.email);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        if !self.hasher.verify(&request.password, &user.password_hash) {
            log::warn!("로그인 실패 (비밀번호 불일치) - email: {}", request.email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let pair = self.sessions.issue(&user.email)?;
        log::info!("로그인 성공 - email: {}", user.email);
        Ok(pair)
    }

    /// 리프레시 토큰 회전
    pub fn refresh(&self, request: RefreshTokenRequest) -> AppResult<TokenPair> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(self.sessions.rotate(&request.refresh_token)?)
    }

    /// 로그아웃. 입력과 관계없이 항상 성공합니다.
    pub fn logout(&self, request: RefreshTokenRequest) -> AppResult<()> {
        self.sessions.invalidate(&request.refresh_token);
        Ok(())
    }

    /// 액세스 토큰의 주체에 해당하는 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 검증 실패 또는 주체에 해당하는 사용자 없음
    pub async fn current_user(&self, access_token: &str) -> AppResult<UserRecord> {
        let email = self.gate.authenticate(access_token)?;

        self.users.find_user(&email).await.ok_or_else(|| {
            log::warn!("토큰 주체에 해당하는 사용자 없음 - email: {}", email);
            AppError::AuthenticationError("User not found".to_string())
        })
    }
}
