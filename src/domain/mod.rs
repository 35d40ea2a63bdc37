//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - User Context: 用户注册与登录凭据
//! - Kitten Context: 小猫记录及其归属规则

pub mod kitten;
pub mod user;
