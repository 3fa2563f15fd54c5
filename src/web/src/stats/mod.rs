pub mod routes;

use crate::{ApiResult, DashboardAppData};
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

pub fn stats_routes() -> Router<DashboardAppData> {
    Router::new().merge(routes::routes())
}

/// Returns the full static record list as JSON, unfiltered and unpaginated.
/// The dataset never changes after startup, so the body is identical across
/// calls.
pub async fn stats_get_action(State(state): State<DashboardAppData>) -> ApiResult<Response> {
    let body = serde_json::to_vec(&state.data.stats)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
