use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::aggregator::{aggregate, AggregateError};
use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};
use crate::models::SendaiInfo;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/api/sendai-info", get(get_sendai_info))
}

/// GET /api/sendai-info
///
/// Current weather and the latest local headlines. Responds 503 only when
/// neither could be fetched.
#[tracing::instrument(skip(global))]
async fn get_sendai_info(State(global): State<Arc<Global>>) -> Result<Json<SendaiInfo>, ApiError> {
    match aggregate(&global).await {
        Ok(info) => Ok(Json(info)),
        Err(AggregateError::AllSourcesUnavailable) => Err(ApiError::service_unavailable(
            ApiErrorCode::SERVICE_UNAVAILABLE,
            "failed to fetch data from every upstream service",
        )),
    }
}
