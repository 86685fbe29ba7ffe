//! 인증 세션 코어
//!
//! 비밀번호 로그인 이후의 토큰 수명주기를 담당하는 라이브러리입니다.
//! 단기 액세스 토큰과 폐기 가능한 장기 리프레시 토큰을 발급하고,
//! 리프레시 토큰은 사용할 때마다 회전(1회용)시킵니다.
//!
//! # Features
//!
//! - **CredentialCodec**: HS256 JWT 생성/검증, 액세스/리프레시 키 분리
//! - **RevocationRegistry**: 활성 리프레시 토큰 ID 집합 (동시성 안전)
//! - **SessionManager**: issue / rotate / invalidate
//! - **AuthGate**: 액세스 토큰 → 주체, 실패는 단일 `Unauthenticated`
//! - **AccountService**: 회원가입, 로그인, 갱신, 로그아웃
//!
//! HTTP 전송 계층은 포함하지 않습니다. 호스트가 [`core::AuthContext`]에서
//! 필요한 서비스를 꺼내 자신의 라우팅에 연결합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ AccountService  │ ← 계정 흐름
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │ SessionManager  │     │    AuthGate     │
//! └─────────────────┘     └─────────────────┘
//!          │        ╲            │
//!          ▼         ╲           ▼
//! ┌─────────────────┐ ╲   ┌─────────────────┐
//! │   Revocation    │  ╲─▶│ CredentialCodec │
//! │    Registry     │     └─────────────────┘
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_session_core::core::AuthContext;
//!
//! let ctx = AuthContext::bootstrap()?;
//! let pair = ctx.sessions().issue("a@x.com")?;
//! let subject = ctx.gate().authenticate(&pair.access_token)?;
//! let rotated = ctx.sessions().rotate(&pair.refresh_token)?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
