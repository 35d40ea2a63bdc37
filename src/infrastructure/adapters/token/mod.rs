//! Token Adapter - JWT 签发与校验

mod jwt_token_service;

pub use jwt_token_service::*;
