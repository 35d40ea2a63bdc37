//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户名 / 密码的输入校验
//! - 用户标识

mod errors;
mod value_objects;

pub use errors::UserError;
pub use value_objects::{Password, UserId, Username};
