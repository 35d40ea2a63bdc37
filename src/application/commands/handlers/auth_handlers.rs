//! Auth Command Handlers - 注册 / 登录

use std::sync::Arc;

use crate::application::commands::{Login, Register};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUser, PasswordHasherPort, TokenServicePort, UserRepositoryPort};
use crate::domain::user::{Password, UserId, Username};

/// 注册 / 登录成功后的结果
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub user_id: UserId,
    pub token: String,
}

// 登录失败统一返回同一条消息，不区分“用户不存在”和“密码错误”
fn invalid_credentials() -> ApplicationError {
    ApplicationError::unauthorized("invalid username or password")
}

// ============================================================================
// Register
// ============================================================================

/// Register Handler
pub struct RegisterHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenServicePort>,
}

impl RegisterHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, command: Register) -> Result<AuthToken, ApplicationError> {
        let username = Username::new(command.username)?;
        let password = Password::new(command.password)?;

        let password_hash = self.hasher.hash(&password).await?;

        let user = self
            .user_repo
            .create(&NewUser {
                username: username.as_str().to_string(),
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(user.user_id(), &username)?;

        tracing::info!(
            user_id = %user.id,
            username = %username,
            "User registered"
        );

        Ok(AuthToken {
            user_id: user.user_id(),
            token,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login Handler
pub struct LoginHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenServicePort>,
}

impl LoginHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, command: Login) -> Result<AuthToken, ApplicationError> {
        // 格式不合法的输入不可能匹配任何账户
        let (Ok(username), Ok(password)) =
            (Username::new(command.username), Password::new(command.password))
        else {
            return Err(invalid_credentials());
        };

        let Some(user) = self.user_repo.find_by_username(username.as_str()).await? else {
            tracing::warn!(username = %username, "Login failed: unknown user");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(&password, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(invalid_credentials());
        }

        let token = self.tokens.issue(user.user_id(), &username)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthToken {
            user_id: user.user_id(),
            token,
        })
    }
}
