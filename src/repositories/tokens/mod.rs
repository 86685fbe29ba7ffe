//! 토큰 상태 리포지토리 모듈
//!
//! 리프레시 토큰의 활성/폐기 상태를 보관하는 [`RevocationRegistry`]를 제공합니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::tokens::RevocationRegistry;
//!
//! let registry = Arc::new(RevocationRegistry::new());
//! registry.register("jti");
//! assert!(registry.is_active("jti"));
//! registry.revoke("jti");
//! ```

pub mod revocation_registry;

pub use revocation_registry::*;
