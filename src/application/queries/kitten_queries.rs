//! Kitten Queries

use crate::domain::kitten::KittenId;
use crate::domain::user::UserId;

/// 读取小猫详情查询
#[derive(Debug, Clone)]
pub struct GetKitten {
    pub requester: UserId,
    pub kitten_id: KittenId,
}
