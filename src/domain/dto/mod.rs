//! 데이터 전송 객체 (DTO) 모듈
//!
//! 호스트 전송 계층이 역직렬화하여 계정 서비스에 넘기는 요청 구조체입니다.
//! 모든 요청은 `validator`로 검증됩니다.

pub mod users;

pub use users::*;
