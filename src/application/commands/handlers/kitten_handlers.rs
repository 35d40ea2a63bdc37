//! Kitten Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateKitten, DeleteKitten};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    KittenRepositoryPort, NewKitten, RepositoryError, UserRepositoryPort,
};
use crate::application::queries::handlers::KittenView;
use crate::domain::kitten::{KittenAge, KittenColor, KittenName};

fn unknown_requester() -> ApplicationError {
    ApplicationError::unauthorized("token refers to an unknown user")
}

// ============================================================================
// CreateKitten
// ============================================================================

/// CreateKitten Handler
///
/// 令牌签名有效不代表用户仍然存在（例如数据库被重置），
/// 创建前先确认请求者仍是已注册用户。
pub struct CreateKittenHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    kitten_repo: Arc<dyn KittenRepositoryPort>,
}

impl CreateKittenHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        kitten_repo: Arc<dyn KittenRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            kitten_repo,
        }
    }

    pub async fn handle(&self, command: CreateKitten) -> Result<KittenView, ApplicationError> {
        let name = KittenName::new(command.name)?;
        let age = KittenAge::new(command.age)?;
        let color = KittenColor::new(command.color)?;

        let owner_id = command.requester.value();
        if self.user_repo.find_by_id(owner_id).await?.is_none() {
            tracing::warn!(user_id = %owner_id, "Token refers to unknown user");
            return Err(unknown_requester());
        }

        let record = self
            .kitten_repo
            .create(&NewKitten {
                name: name.as_str().to_string(),
                age: age.value(),
                color: color.as_str().to_string(),
                owner_id,
            })
            .await
            .map_err(|e| match e {
                // 检查之后用户被删除：外键约束失败
                RepositoryError::NotFound(_) => unknown_requester(),
                other => other.into(),
            })?;

        tracing::info!(
            kitten_id = %record.id,
            owner_id = %command.requester,
            "Kitten created"
        );

        Ok(KittenView::from(record.into_domain()?))
    }
}

// ============================================================================
// DeleteKitten
// ============================================================================

/// DeleteKitten Handler
pub struct DeleteKittenHandler {
    kitten_repo: Arc<dyn KittenRepositoryPort>,
}

impl DeleteKittenHandler {
    pub fn new(kitten_repo: Arc<dyn KittenRepositoryPort>) -> Self {
        Self { kitten_repo }
    }

    pub async fn handle(&self, command: DeleteKitten) -> Result<(), ApplicationError> {
        let kitten_id = command.kitten_id.value();

        let kitten = self
            .kitten_repo
            .find_by_id(kitten_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Kitten", kitten_id))?
            .into_domain()?;

        kitten.ensure_owned_by(command.requester)?;

        // 并发删除时记录可能已不存在
        if !self.kitten_repo.delete(kitten_id).await? {
            return Err(ApplicationError::not_found("Kitten", kitten_id));
        }

        tracing::info!(
            kitten_id = %kitten_id,
            owner_id = %command.requester,
            "Kitten deleted"
        );

        Ok(())
    }
}
