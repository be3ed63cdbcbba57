use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::entity;

use crate::entity::repository::EntityStore;
use crate::errors::ServiceError;

/// In-memory store backed by a `BTreeMap` keyed on id.
///
/// Ids ascend from 1, so map iteration order matches insertion order the
/// same way the auto-increment column does. Used by the HTTP test suites
/// and for running the service without a database.
#[derive(Debug)]
pub struct MemoryEntityStore {
    rows: RwLock<BTreeMap<i64, entity::Model>>,
    next_id: AtomicI64,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn find_all(&self) -> Result<Vec<entity::Model>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<entity::Model>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, field: Option<String>) -> Result<entity::Model, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = entity::Model { id, field };
        let mut rows = self.rows.write().await;
        rows.insert(id, model.clone());
        Ok(model)
    }

    async fn update(
        &self,
        id: i64,
        field: Option<Option<String>>,
    ) -> Result<Option<entity::Model>, ServiceError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            None => Ok(None),
            Some(row) => {
                if let Some(next) = field {
                    row.field = next;
                }
                Ok(Some(row.clone()))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_ascend_and_listing_is_ordered() {
        let store = MemoryEntityStore::new();
        let a = store.create(Some("a".into())).await.unwrap();
        let b = store.create(Some("b".into())).await.unwrap();
        let c = store.create(None).await.unwrap();
        assert!(a.id < b.id && b.id < c.id);

        let all = store.find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryEntityStore::new();
        let a = store.create(Some("a".into())).await.unwrap();
        assert!(store.delete_by_id(a.id).await.unwrap());
        let b = store.create(Some("b".into())).await.unwrap();
        assert!(b.id > a.id);
    }
}
