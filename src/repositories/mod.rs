//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`tokens`] - 리프레시 토큰 폐기 레지스트리
//! - [`users`] - 사용자 저장소 협력자
//!
//! 모든 리포지토리는 생성자로 만들어 `Arc`로 주입합니다.

pub mod tokens;
pub mod users;
