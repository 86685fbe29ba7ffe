//! 에러 모듈
//!
//! 토큰 수명주기 에러([`TokenError`])와 애플리케이션 에러([`AppError`])를 제공합니다.

pub mod errors;

pub use errors::*;
