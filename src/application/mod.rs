//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、PasswordHasher、TokenService）
//! - commands: CQRS 命令及处理器（注册、登录、创建/删除小猫）
//! - queries: CQRS 查询及处理器（读取小猫）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Auth commands
    Login,
    Register,
    // Kitten commands
    CreateKitten,
    DeleteKitten,
    // Handlers
    handlers::{AuthToken, CreateKittenHandler, DeleteKittenHandler, LoginHandler, RegisterHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Repositories
    KittenRecord,
    KittenRepositoryPort,
    NewKitten,
    NewUser,
    RepositoryError,
    UserRecord,
    UserRepositoryPort,
    // Password hasher
    PasswordError,
    PasswordHasherPort,
    // Token service
    TokenClaims,
    TokenError,
    TokenServicePort,
};

pub use queries::{
    GetKitten,
    handlers::{GetKittenHandler, KittenView},
};
