//! Kitten Context - Aggregate Root

use serde::Serialize;

use super::{KittenAge, KittenColor, KittenError, KittenId, KittenName};
use crate::domain::user::UserId;

/// Kitten 聚合根
///
/// 不变量:
/// - 每只小猫有且只有一个主人
/// - 只有主人可以读取或删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kitten {
    id: KittenId,
    name: KittenName,
    age: KittenAge,
    color: KittenColor,
    owner_id: UserId,
}

impl Kitten {
    pub fn new(
        id: KittenId,
        name: KittenName,
        age: KittenAge,
        color: KittenColor,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            name,
            age,
            color,
            owner_id,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// 校验请求者是否为主人
    pub fn ensure_owned_by(&self, user_id: UserId) -> Result<(), KittenError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(KittenError::NotOwner {
                kitten_id: self.id,
                user_id,
            })
        }
    }

    // Getters
    pub fn id(&self) -> KittenId {
        self.id
    }

    pub fn name(&self) -> &KittenName {
        &self.name
    }

    pub fn age(&self) -> KittenAge {
        self.age
    }

    pub fn color(&self) -> &KittenColor {
        &self.color
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }
}
