use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::entity;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Write payload for create/update/patch. Any identifier in the body is
/// ignored; the path parameter is authoritative.
#[derive(Debug, Deserialize, Serialize)]
pub struct EntityInput {
    #[serde(default)]
    pub field: Option<String>,
}

#[utoipa::path(
    get, path = "/entities", tag = "entities",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<entity::Model>>, ApiError> {
    let rows = state.entities.find_all().await?;
    info!(count = rows.len(), "list entities");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/entities/{id}", tag = "entities",
    params(("id" = i64, Path, description = "Entity ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<entity::Model>, ApiError> {
    match state.entities.find_by_id(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::not_found("entity")),
    }
}

#[utoipa::path(
    post, path = "/entities", tag = "entities",
    request_body = crate::openapi::EntityInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<EntityInput>,
) -> Result<(StatusCode, Json<entity::Model>), ApiError> {
    let created = state.entities.create(input.field).await?;
    info!(id = created.id, "created entity");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/entities/{id}", tag = "entities",
    params(("id" = i64, Path, description = "Entity ID")),
    request_body = crate::openapi::EntityInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<EntityInput>,
) -> Result<Json<entity::Model>, ApiError> {
    match state.entities.update(id, input.field).await? {
        Some(m) => {
            info!(id = m.id, "updated entity");
            Ok(Json(m))
        }
        None => Err(ApiError::not_found("entity")),
    }
}

#[utoipa::path(
    patch, path = "/entities/{id}", tag = "entities",
    params(("id" = i64, Path, description = "Entity ID")),
    request_body = crate::openapi::EntityInputDoc,
    responses(
        (status = 200, description = "Patched"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<EntityInput>,
) -> Result<Json<entity::Model>, ApiError> {
    match state.entities.partial_update(id, input.field).await? {
        Some(m) => {
            info!(id = m.id, "patched entity");
            Ok(Json(m))
        }
        None => Err(ApiError::not_found("entity")),
    }
}

#[utoipa::path(
    delete, path = "/entities/{id}", tag = "entities",
    params(("id" = i64, Path, description = "Entity ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.entities.delete_by_id(id).await? {
        info!(id, "deleted entity");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("entity"))
    }
}
