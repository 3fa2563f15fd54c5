use crate::DashboardAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<DashboardAppData> {
    Router::new().route("/api/refresh", post(super::refresh_post_action))
}
