pub mod routes;

use crate::DashboardAppData;
use axum::Json;
use axum::Router;
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use serde_json::json;

pub fn refresh_routes() -> Router<DashboardAppData> {
    Router::new().merge(routes::routes())
}

/// Simulates a data refresh. The dataset is static, so the payload always
/// reports `newData: false` together with the current timestamp. Any request
/// body is accepted and ignored.
pub async fn refresh_post_action() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Refresh complete (mock data)",
        "newData": false,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}
