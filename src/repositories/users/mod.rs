//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_repo::UserStore) 협력자 계약과 메모리 기반 구현을 제공합니다.

pub mod user_repo;

pub use user_repo::*;
