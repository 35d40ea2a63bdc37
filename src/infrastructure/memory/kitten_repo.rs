//! In-Memory Kitten Repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{KittenRecord, KittenRepositoryPort, NewKitten, RepositoryError};

/// 内存小猫仓储
///
/// 不校验 owner_id 是否存在（没有外键约束）。
pub struct InMemoryKittenRepository {
    kittens: DashMap<i64, KittenRecord>,
    next_id: AtomicI64,
}

impl InMemoryKittenRepository {
    pub fn new() -> Self {
        Self {
            kittens: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryKittenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KittenRepositoryPort for InMemoryKittenRepository {
    async fn create(&self, kitten: &NewKitten) -> Result<KittenRecord, RepositoryError> {
        let record = KittenRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: kitten.name.clone(),
            age: kitten.age,
            color: kitten.color.clone(),
            owner_id: kitten.owner_id,
            created_at: Utc::now(),
        };
        self.kittens.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<KittenRecord>, RepositoryError> {
        Ok(self.kittens.get(&id).map(|k| k.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.kittens.remove(&id).is_some())
    }
}
