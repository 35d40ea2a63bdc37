//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateKittenHandler, DeleteKittenHandler, LoginHandler, RegisterHandler,
    // Query handlers
    GetKittenHandler,
    // Ports
    KittenRepositoryPort, PasswordHasherPort, TokenServicePort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    /// 认证中间件校验令牌
    pub tokens: Arc<dyn TokenServicePort>,

    // ========== Command Handlers ==========
    pub register_handler: RegisterHandler,
    pub login_handler: LoginHandler,
    pub create_kitten_handler: CreateKittenHandler,
    pub delete_kitten_handler: DeleteKittenHandler,

    // ========== Query Handlers ==========
    pub get_kitten_handler: GetKittenHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        kitten_repo: Arc<dyn KittenRepositoryPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            // Command handlers
            register_handler: RegisterHandler::new(
                user_repo.clone(),
                hasher.clone(),
                tokens.clone(),
            ),
            login_handler: LoginHandler::new(user_repo.clone(), hasher, tokens.clone()),
            create_kitten_handler: CreateKittenHandler::new(user_repo, kitten_repo.clone()),
            delete_kitten_handler: DeleteKittenHandler::new(kitten_repo.clone()),

            // Query handlers
            get_kitten_handler: GetKittenHandler::new(kitten_repo),

            // Ports
            tokens,
        }
    }
}
