//! # 문자열 유틸리티
//!
//! 로그 출력 등 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 로그 출력용 식별자 마스킹
///
/// 토큰 ID 전체를 로그에 남기지 않도록 앞 8글자만 남깁니다.
pub fn mask_identifier(value: &str) -> String {
    match value.char_indices().nth(8) {
        Some((idx, _)) => format!("{}…", &value[..idx]),
        None => value.to_string(),
    }
}
