use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::entity::{EntityService, EntityStore, SeaOrmEntityStore};

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils; `LOG_FORMAT=json` switches
/// to structured output for container environments.
fn init_logging() {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Build the handler state over the SeaORM store.
pub fn build_state(db: DatabaseConnection) -> ServerState {
    let store: Arc<dyn EntityStore> = Arc::new(SeaOrmEntityStore::new(db));
    ServerState { entities: Arc::new(EntityService::new(store)) }
}

/// Public entry: connect, migrate, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection, with pool tuning when a config file is present
    let db = match configs::load_default() {
        Ok(cfg) if !cfg.database.url.trim().is_empty() => {
            models::db::connect_with_config(&cfg.database).await?
        }
        _ => models::db::connect().await?,
    };
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    let state = build_state(db);

    // Build router
    let app: Router = routes::build_router(build_cors(), state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting entity store server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
