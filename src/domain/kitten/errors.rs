//! Kitten Context - Errors

use thiserror::Error;

use super::KittenId;
use crate::domain::user::UserId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KittenError {
    #[error("invalid kitten name: {0}")]
    InvalidName(&'static str),

    #[error("invalid kitten age: {0}")]
    InvalidAge(i64),

    #[error("invalid kitten color: {0}")]
    InvalidColor(&'static str),

    #[error("kitten {kitten_id} is not owned by user {user_id}")]
    NotOwner { kitten_id: KittenId, user_id: UserId },
}
