//! 도메인 모델 모듈
//!
//! - [`token`] - JWT 클레임, 토큰 종류, 토큰 쌍

pub mod token;

pub use token::*;
