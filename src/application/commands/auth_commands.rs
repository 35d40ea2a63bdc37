//! Auth Commands

/// 注册命令
#[derive(Debug, Clone)]
pub struct Register {
    pub username: String,
    pub password: String,
}

/// 登录命令
#[derive(Debug, Clone)]
pub struct Login {
    pub username: String,
    pub password: String,
}
