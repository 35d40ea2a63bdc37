//! Kitten Commands

use crate::domain::kitten::KittenId;
use crate::domain::user::UserId;

/// 创建小猫命令，requester 即成为主人
#[derive(Debug, Clone)]
pub struct CreateKitten {
    pub requester: UserId,
    pub name: String,
    pub age: i64,
    pub color: String,
}

/// 删除小猫命令
#[derive(Debug, Clone)]
pub struct DeleteKitten {
    pub requester: UserId,
    pub kitten_id: KittenId,
}
