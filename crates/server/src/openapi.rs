use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Wire shape of a stored entity.
#[derive(ToSchema)]
pub struct EntityDoc {
    pub id: i64,
    pub field: Option<String>,
}

/// Write payload for create/update/patch.
#[derive(ToSchema)]
pub struct EntityInputDoc {
    pub field: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::entities::list,
        crate::routes::entities::get,
        crate::routes::entities::create,
        crate::routes::entities::update,
        crate::routes::entities::partial_update,
        crate::routes::entities::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EntityDoc,
            EntityInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "entities")
    )
)]
pub struct ApiDoc;
