//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`clock`] - 주입 가능한 시간 공급자
//! - [`logging`] - env_logger 초기화
//! - [`string_utils`] - 문자열 검증, 로그 마스킹

pub mod clock;
pub mod logging;
pub mod string_utils;
