//! Memory Layer - In-Memory Repositories
//!
//! 基于 DashMap 的仓储实现，用于测试和 `database.backend = "memory"` 的演示部署。
//! 进程退出后数据丢失。

mod kitten_repo;
mod user_repo;

pub use kitten_repo::InMemoryKittenRepository;
pub use user_repo::InMemoryUserRepository;
