//! User Entity Implementation
//!
//! 사용자 저장소 협력자가 반환하는 사용자 레코드입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 레코드
///
/// 이메일이 곧 토큰의 `sub` 클레임(주체)입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (직렬화 시 제외)
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
