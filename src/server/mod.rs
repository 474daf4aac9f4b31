use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::core::{Aggregate, ConfigProvider, Result, ShipInfo};
use crate::utils::error::ShipInfoError;

pub fn router<A>(aggregator: Arc<A>) -> Router
where
    A: Aggregate + 'static,
{
    Router::new()
        .route("/", get(ship_info::<A>))
        .route("/health", get(health))
        .with_state(aggregator)
}

async fn ship_info<A>(State(aggregator): State<Arc<A>>) -> Result<Json<ShipInfo>>
where
    A: Aggregate,
{
    let info = aggregator.aggregate().await?;
    Ok(Json(info))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

// Any upstream fault surfaces as a bare 500; callers get no structured
// error body and no hint of which dependency failed.
impl IntoResponse for ShipInfoError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Aggregation request failed: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

pub async fn serve<A, C>(aggregator: Arc<A>, config: &C) -> Result<()>
where
    A: Aggregate + 'static,
    C: ConfigProvider,
{
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(aggregator)).await?;
    Ok(())
}
