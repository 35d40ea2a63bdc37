//! In-Memory User Repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{NewUser, RepositoryError, UserRecord, UserRepositoryPort};

/// 内存用户仓储
///
/// 以用户名为键，`entry` API 保证用户名唯一性检查与插入是原子的。
pub struct InMemoryUserRepository {
    users: DashMap<String, UserRecord>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(format!(
                "username already taken: {}",
                user.username
            ))),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    username: user.username.clone(),
                    password_hash: user.password_hash.clone(),
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                tracing::debug!(user_id = record.id, "User stored in memory");
                Ok(record)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.get(username).map(|u| u.clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.value().clone()))
    }
}
