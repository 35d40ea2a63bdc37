//! Kitten Context - 小猫限界上下文
//!
//! 职责:
//! - 小猫属性校验（名字、年龄、颜色）
//! - 归属规则：只有主人可以读取 / 删除

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Kitten;
pub use errors::KittenError;
pub use value_objects::{KittenAge, KittenColor, KittenId, KittenName};
