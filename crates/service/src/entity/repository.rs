use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use models::entity;

use crate::errors::ServiceError;

/// Storage capability for the entity table.
///
/// `update` takes the new `field` value wrapped twice: the outer `None`
/// leaves the stored value untouched, `Some(v)` writes `v` (which may
/// itself be null). Absent rows come back as `Ok(None)` / `Ok(false)`,
/// never as errors.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<entity::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<entity::Model>, ServiceError>;
    async fn create(&self, field: Option<String>) -> Result<entity::Model, ServiceError>;
    async fn update(
        &self,
        id: i64,
        field: Option<Option<String>>,
    ) -> Result<Option<entity::Model>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed store implementation.
///
/// Every operation runs inside its own transaction: begun at entry,
/// committed on success, rolled back on any error.
pub struct SeaOrmEntityStore {
    db: DatabaseConnection,
}

impl SeaOrmEntityStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore for SeaOrmEntityStore {
    async fn find_all(&self) -> Result<Vec<entity::Model>, ServiceError> {
        let rows = self
            .db
            .transaction::<_, Vec<entity::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    entity::Entity::find()
                        .order_by_asc(entity::Column::Id)
                        .all(txn)
                        .await
                        .map_err(|e| ServiceError::Db(e.to_string()))
                })
            })
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<entity::Model>, ServiceError> {
        let found = self
            .db
            .transaction::<_, Option<entity::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    entity::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(|e| ServiceError::Db(e.to_string()))
                })
            })
            .await?;
        Ok(found)
    }

    async fn create(&self, field: Option<String>) -> Result<entity::Model, ServiceError> {
        let created = self
            .db
            .transaction::<_, entity::Model, ServiceError>(|txn| {
                Box::pin(async move { Ok(entity::create(txn, field).await?) })
            })
            .await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        field: Option<Option<String>>,
    ) -> Result<Option<entity::Model>, ServiceError> {
        let updated = self
            .db
            .transaction::<_, Option<entity::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    let Some(existing) = entity::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(|e| ServiceError::Db(e.to_string()))?
                    else {
                        return Ok(None);
                    };
                    let row = match field {
                        // nothing to write, hand back the current row
                        None => existing,
                        Some(next) => {
                            let mut am: entity::ActiveModel = existing.into();
                            am.field = Set(next);
                            am.update(txn).await.map_err(|e| ServiceError::Db(e.to_string()))?
                        }
                    };
                    Ok(Some(row))
                })
            })
            .await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, ServiceError>(|txn| {
                Box::pin(async move {
                    let res = entity::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|e| ServiceError::Db(e.to_string()))?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await?;
        Ok(deleted)
    }
}
