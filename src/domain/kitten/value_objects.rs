//! Kitten Context - Value Objects

use serde::Serialize;

use super::KittenError;

/// 小猫唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KittenId(i64);

impl KittenId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for KittenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

const MAX_TEXT_LEN: usize = 100;

/// 小猫名字
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KittenName(String);

impl KittenName {
    pub fn new(name: impl Into<String>) -> Result<Self, KittenError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(KittenError::InvalidName("name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_TEXT_LEN {
            return Err(KittenError::InvalidName("name cannot exceed 100 characters"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 小猫颜色（自由文本，如 "black"、"tabby"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KittenColor(String);

impl KittenColor {
    pub fn new(color: impl Into<String>) -> Result<Self, KittenError> {
        let color = color.into();
        let trimmed = color.trim();
        if trimmed.is_empty() {
            return Err(KittenError::InvalidColor("color cannot be empty"));
        }
        if trimmed.chars().count() > MAX_TEXT_LEN {
            return Err(KittenError::InvalidColor(
                "color cannot exceed 100 characters",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 小猫年龄（年）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KittenAge(u8);

impl KittenAge {
    pub const MAX: i64 = 100;

    pub fn new(age: i64) -> Result<Self, KittenError> {
        if !(0..=Self::MAX).contains(&age) {
            return Err(KittenError::InvalidAge(age));
        }
        Ok(Self(age as u8))
    }

    pub fn value(&self) -> i64 {
        i64::from(self.0)
    }
}
