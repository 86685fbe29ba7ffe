//! 인증 및 토큰 수명주기 서비스 모듈
//!
//! 토큰 발급/검증/회전/폐기를 담당하는 핵심 엔진입니다.
//!
//! # 구성
//!
//! - [`CredentialCodec`] - JWT 생성 및 검증 (구조 → 서명 → 만료 → 종류)
//! - [`SessionManager`] - 토큰 쌍 발급, 리프레시 토큰 회전, 로그아웃
//! - [`AuthGate`] - 액세스 토큰 인증
//! - [`PasswordHasher`] - 비밀번호 해싱 협력자 (기본 구현: bcrypt)
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 액세스/리프레시 키 분리
//! - 리프레시 토큰 1회용 회전
//! - 게이트는 거부 사유를 외부에 노출하지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{AuthGate, CredentialCodec, SessionManager};
//!
//! let codec = Arc::new(CredentialCodec::new(&jwt_config, Arc::new(SystemClock)));
//! let sessions = SessionManager::new(codec.clone(), registry.clone());
//! let gate = AuthGate::new(codec);
//!
//! let pair = sessions.issue("a@x.com")?;
//! assert_eq!(gate.authenticate(&pair.access_token)?, "a@x.com");
//! ```

pub mod auth_gate;
pub mod credential_codec;
pub mod password_hasher;
pub mod session_manager;

pub use auth_gate::*;
pub use credential_codec::*;
pub use password_hasher::*;
pub use session_manager::*;
