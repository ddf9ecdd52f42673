use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::rpc::{WalletRpcClient, WalletRpcRequest};

/// Build the gateway router with the shared wallet client attached.
pub fn router(client: Arc<WalletRpcClient>) -> Router {
    Router::new()
        .route("/", get(wallet_address))
        .route("/health", get(|| async { "ok" }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(client)),
        )
}

/// Bind the serving address and run until the process is stopped.
pub async fn serve(cfg: &GatewayConfig, client: Arc<WalletRpcClient>) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let app = router(client);

    info!("Starting gateway server on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}

/// `GET /`: ask the daemon for its wallet address and relay the raw
/// response body. The body is passed through undecoded, so callers see the
/// daemon's full JSON-RPC envelope as a string under `wallet_addr`.
async fn wallet_address(
    Extension(client): Extension<Arc<WalletRpcClient>>,
) -> impl IntoResponse {
    let req = WalletRpcRequest::new("get_address", 0);
    match client.send_request(&req).await {
        Ok(resp) => {
            info!("daemon responded {}: {}", resp.status, resp.body);
            (StatusCode::OK, Json(json!({ "wallet_addr": resp.body })))
        }
        Err(e) => {
            error!("wallet RPC request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
