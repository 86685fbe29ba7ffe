//! # Domain Layer Module
//!
//! 토큰 수명주기와 계정 흐름에서 사용하는 도메인 타입을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 사용자 레코드
//! ├── DTOs      - 회원가입/로그인/갱신 요청
//! └── Models    - 토큰 클레임, 토큰 종류, 토큰 쌍
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use dto::users::auth_request::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use entities::users::user::UserRecord;
pub use models::token::token::{TokenClaims, TokenPair, TokenType};
