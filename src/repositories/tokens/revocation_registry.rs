use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::utils::string_utils::mask_identifier;

/// 리프레시 토큰 폐기 레지스트리
///
/// 현재 사용 가능한 리프레시 토큰 ID(`jti`)의 집합입니다.
/// - 리프레시 토큰 발급 시 등록
/// - 토큰 갱신(rotation) 또는 로그아웃 시 제거
/// - 집합에 없는 ID는 "폐기됨" 또는 "발급된 적 없음"이며 둘을 구분하지 않습니다
///
/// 서비스 시작 시 한 번 생성되어 `Arc`로 주입되고 프로세스 수명 동안 유지됩니다.
/// 영속화하지 않으므로 재시작하면 모든 리프레시 토큰이 사용 불가가 됩니다.
/// 내구성이 필요하면 같은 세 연산을 외부 저장소로 구현해야 합니다.
///
/// 모든 연산은 O(1) 평균이며 락은 집합 조작 동안에만 잡습니다.
#[derive(Debug, Default)]
pub struct RevocationRegistry {
    active: RwLock<HashSet<String>>,
}

impl RevocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰 ID를 활성 상태로 등록합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub fn register(&self, token_id: &str) {
        let inserted = self.write().insert(token_id.to_string());
        if inserted {
            log::debug!("리프레시 토큰 등록 - jti: {}", mask_identifier(token_id));
        }
    }

    /// 토큰 ID를 제거합니다.
    ///
    /// 없는 ID를 폐기해도 에러가 아닙니다. 반환값은 이 호출이 실제로 ID를
    /// 제거했는지 여부이며, 검사와 제거가 하나의 락 안에서 원자적으로 일어나므로
    /// 동시에 같은 ID를 폐기하는 호출 중 정확히 하나만 `true`를 받습니다.
    pub fn revoke(&self, token_id: &str) -> bool {
        let removed = self.write().remove(token_id);
        if removed {
            log::info!("리프레시 토큰 폐기 - jti: {}", mask_identifier(token_id));
        } else {
            log::debug!("이미 폐기되었거나 알 수 없는 토큰 - jti: {}", mask_identifier(token_id));
        }
        removed
    }

    /// 토큰 ID가 현재 활성 상태인지 확인합니다.
    pub fn is_active(&self, token_id: &str) -> bool {
        self.read().contains(token_id)
    }

    /// 활성 리프레시 토큰 수 (진단용)
    pub fn active_count(&self) -> usize {
        self.read().len()
    }

    // 집합에는 문자열만 있어 패닉 중에도 일관성이 깨지지 않으므로 poison을 무시합니다.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.active.write().unwrap_or_else(PoisonError::into_inner)
    }
}
