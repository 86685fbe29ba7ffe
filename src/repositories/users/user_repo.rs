//! # 사용자 저장소 협력자
//!
//! 사용자 레코드의 영속화는 이 크레이트의 범위 밖이며, [`UserStore`] trait으로만 의존합니다.
//! 실행/테스트를 위해 프로세스 메모리 기반 구현 [`InMemoryUserStore`]를 제공합니다.
//!
//! 계약:
//!
//! - `find_user(email)` - 없으면 `None`
//! - `create_user(email, password_hash)` - 생성 실패(중복 포함) 시 `None`

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::entities::users::user::UserRecord;

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자를 조회합니다.
    async fn find_user(&self, email: &str) -> Option<UserRecord>;

    /// 새 사용자를 생성합니다. 실패 시 `None`을 반환합니다.
    async fn create_user(&self, email: &str, password_hash: &str) -> Option<UserRecord>;
}

/// 메모리 기반 사용자 저장소
///
/// 이메일을 키로 하는 `RwLock<HashMap>`입니다. 재시작 시 내용이 사라집니다.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user(&self, email: &str) -> Option<UserRecord> {
        let user = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .cloned();
        log::debug!("사용자 조회 - email: {}, found: {}", email, user.is_some());
        user
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Option<UserRecord> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(email) {
            log::warn!("이미 존재하는 이메일로 생성 시도 - email: {}", email);
            return None;
        }

        let user = UserRecord::new_local(email.to_string(), password_hash.to_string());
        users.insert(email.to_string(), user.clone());
        log::info!("사용자 생성 완료 - email: {}, id: {}", email, user.id);
        Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find() {
        let store = InMemoryUserStore::new();
        assert!(store.find_user("a@x.com").await.is_none());

        let created = store.create_user("a@x.com", "digest").await.unwrap();
        let found = store.find_user("a@x.com").await.unwrap();

        assert_eq!(created, found);
        assert_eq!(found.password_hash, "digest");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_returns_none() {
        let store = InMemoryUserStore::new();
        store.create_user("a@x.com", "first").await.unwrap();

        assert!(store.create_user("a@x.com", "second").await.is_none());
        assert_eq!(store.find_user("a@x.com").await.unwrap().password_hash, "first");
    }
}
