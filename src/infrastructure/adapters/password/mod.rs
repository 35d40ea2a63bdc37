//! Password Adapter - bcrypt 密码哈希实现

mod bcrypt_hasher;

pub use bcrypt_hasher::*;
