use std::sync::Arc;

use tracing::instrument;

use models::entity;

use crate::entity::repository::EntityStore;
use crate::errors::ServiceError;

/// Application service sequencing entity operations.
///
/// The store capability is passed in at construction; full-replace (PUT)
/// vs. partial-merge (PATCH) semantics are decided here and expressed as
/// a field patch for the store. Absent rows surface as `None` / `false`,
/// storage failures as `ServiceError`.
pub struct EntityService<R: EntityStore + ?Sized> {
    repo: Arc<R>,
}

impl<R: EntityStore + ?Sized> EntityService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<entity::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, field: Option<String>) -> Result<entity::Model, ServiceError> {
        self.repo.create(field).await
    }

    /// Full replace: the incoming value always wins, including null.
    pub async fn update(
        &self,
        id: i64,
        field: Option<String>,
    ) -> Result<Option<entity::Model>, ServiceError> {
        self.repo.update(id, Some(field)).await
    }

    /// Partial merge: a null or absent value leaves the stored one alone.
    pub async fn partial_update(
        &self,
        id: i64,
        field: Option<String>,
    ) -> Result<Option<entity::Model>, ServiceError> {
        self.repo.update(id, field.map(Some)).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
