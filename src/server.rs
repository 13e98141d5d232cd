//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::kv::RedisStore;
use crate::infrastructure::persistence::KvRegistry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis connection (validated with a PING)
/// - Registry and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = RedisStore::connect(&config.redis_url).await?;
    let registry = Arc::new(KvRegistry::new(Arc::new(store)));

    let state = AppState::new(registry, config.admin_token.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
