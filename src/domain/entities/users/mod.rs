//! Users Entity Module
//!
//! 사용자 저장소 협력자와 주고받는 [`UserRecord`](user::UserRecord)를 정의합니다.

pub mod user;

pub use user::*;
