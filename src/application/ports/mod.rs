//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod password_hasher;
mod repositories;
mod token_service;

pub use password_hasher::{PasswordError, PasswordHasherPort};
pub use repositories::{
    KittenRecord, KittenRepositoryPort, NewKitten, NewUser, RepositoryError, UserRecord,
    UserRepositoryPort,
};
pub use token_service::{TokenClaims, TokenError, TokenServicePort};
