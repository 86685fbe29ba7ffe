//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 생성자로 의존성을 주입받으며 전역 상태를 갖지 않습니다.
//! 조립은 [`AuthContext`](crate::core::AuthContext)가 담당합니다.
//!
//! - [`auth`] - 토큰 수명주기 엔진 (코덱, 세션 매니저, 인증 게이트)
//! - [`users`] - 계정 흐름 (회원가입, 로그인, 로그아웃)

pub mod auth;
pub mod users;
