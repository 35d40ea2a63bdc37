//! Cyber Kittens - 带认证的小猫 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户名 / 密码校验
//! - Kitten Context: 小猫属性与归属规则
//!
//! 应用层 (application/):
//! - Ports: UserRepository, KittenRepository, PasswordHasher, TokenService
//! - Commands: 注册、登录、创建 / 删除小猫
//! - Queries: 读取小猫
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 认证中间件 + 统一错误响应
//! - Persistence: SQLite
//! - Memory: DashMap 内存仓储
//! - Adapters: bcrypt 密码哈希, JWT

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
