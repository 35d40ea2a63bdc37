//! Kitten Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::KittenRepositoryPort;
use crate::application::queries::GetKitten;
use crate::domain::kitten::Kitten;

// ============================================================================
// Response DTOs
// ============================================================================

/// 小猫详情（不包含主人信息）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittenView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub color: String,
}

impl From<Kitten> for KittenView {
    fn from(kitten: Kitten) -> Self {
        Self {
            id: kitten.id().value(),
            name: kitten.name().as_str().to_string(),
            age: kitten.age().value(),
            color: kitten.color().as_str().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetKitten Handler
pub struct GetKittenHandler {
    kitten_repo: Arc<dyn KittenRepositoryPort>,
}

impl GetKittenHandler {
    pub fn new(kitten_repo: Arc<dyn KittenRepositoryPort>) -> Self {
        Self { kitten_repo }
    }

    pub async fn handle(&self, query: GetKitten) -> Result<KittenView, ApplicationError> {
        let kitten_id = query.kitten_id.value();

        let kitten = self
            .kitten_repo
            .find_by_id(kitten_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Kitten", kitten_id))?
            .into_domain()?;

        kitten.ensure_owned_by(query.requester)?;

        Ok(KittenView::from(kitten))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewKitten;
    use crate::domain::kitten::KittenId;
    use crate::domain::user::UserId;
    use crate::infrastructure::memory::InMemoryKittenRepository;

    async fn seeded() -> (GetKittenHandler, i64) {
        let repo = Arc::new(InMemoryKittenRepository::new());
        let record = repo
            .create(&NewKitten {
                name: "Salem".to_string(),
                age: 4,
                color: "black".to_string(),
                owner_id: 10,
            })
            .await
            .unwrap();
        (GetKittenHandler::new(repo), record.id)
    }

    #[tokio::test]
    async fn test_owner_reads_kitten() {
        let (handler, id) = seeded().await;
        let view = handler
            .handle(GetKitten {
                requester: UserId::new(10),
                kitten_id: KittenId::new(id),
            })
            .await
            .unwrap();

        assert_eq!(
            view,
            KittenView {
                id,
                name: "Salem".to_string(),
                age: 4,
                color: "black".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_stranger_is_unauthorized() {
        let (handler, id) = seeded().await;
        let err = handler
            .handle(GetKitten {
                requester: UserId::new(11),
                kitten_id: KittenId::new(id),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_missing_is_not_found() {
        let (handler, id) = seeded().await;
        let err = handler
            .handle(GetKitten {
                requester: UserId::new(10),
                kitten_id: KittenId::new(id + 1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
