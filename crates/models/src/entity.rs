use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// The single persisted record type managed by this service.
///
/// `id` is assigned by the datastore on insert and immutable afterwards;
/// `field` is the only mutable business attribute.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub field: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new row; the store assigns the id.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
    field: Option<String>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        field: Set(field),
    };
    am.insert(conn).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
