//! # Core Module
//!
//! 서비스 조립을 담당합니다. 전역 서비스 로케이터 대신 [`AuthContext`]가
//! 모든 구성 요소를 생성자 주입으로 연결합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::AuthContext;
//!
//! // 운영: 환경 변수와 기본 협력자
//! let ctx = AuthContext::bootstrap()?;
//!
//! // 테스트: 직접 구성
//! let ctx = AuthContext::new(&jwt_config, clock, hasher, users);
//! ```

pub mod context;

pub use context::*;
