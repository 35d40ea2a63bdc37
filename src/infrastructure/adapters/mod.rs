//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod password;
pub mod token;

pub use password::*;
pub use token::*;
