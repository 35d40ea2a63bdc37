//! User Context - Value Objects

use serde::Serialize;

use super::UserError;

/// 用户唯一标识（由存储层分配的自增主键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 用户名
///
/// 不变量:
/// - 长度 1..=64 字符
/// - 不包含空白字符
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Username(String);

impl Username {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: impl Into<String>) -> Result<Self, UserError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserError::InvalidUsername("username cannot be empty"));
        }
        if name.chars().count() > Self::MAX_LEN {
            return Err(UserError::InvalidUsername(
                "username cannot exceed 64 characters",
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(UserError::InvalidUsername(
                "username cannot contain whitespace",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 明文密码
///
/// bcrypt 只使用前 72 字节，超出部分会被静默截断，这里直接拒绝。
/// 不实现 Display / Serialize，避免被意外写进日志或响应体。
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MAX_BYTES: usize = 72;

    pub fn new(password: impl Into<String>) -> Result<Self, UserError> {
        let password = password.into();
        if password.is_empty() {
            return Err(UserError::InvalidPassword("password cannot be empty"));
        }
        if password.len() > Self::MAX_BYTES {
            return Err(UserError::InvalidPassword(
                "password cannot exceed 72 bytes",
            ));
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}
