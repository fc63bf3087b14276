use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;

pub mod sendai_info;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/", get(root))
        .merge(sendai_info::routes())
}

#[derive(serde::Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Sendai Info API. Current weather and news are at /api/sendai-info.",
        version: env!("CARGO_PKG_VERSION"),
    })
}
