//! 로깅 초기화

use env_logger::Env;

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 `RUST_LOG`를 기반으로 로깅 레벨을 설정하며 기본값은 `info`입니다.
/// 이미 초기화된 경우 아무 일도 하지 않으므로 테스트마다 호출해도 안전합니다.
///
/// ```bash
/// RUST_LOG=auth_session_core::services=debug cargo test
/// ```
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .try_init();
}
