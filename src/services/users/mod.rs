//! 계정 서비스 모듈
//!
//! 회원가입, 로그인, 토큰 갱신/로그아웃, 현재 사용자 조회를 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 이메일 중복 방지
//! - 입력값 검증 (`validator`)
//! - 로그인 실패 사유 비노출

pub mod account_service;

pub use account_service::*;
