use crate::DashboardAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<DashboardAppData> {
    Router::new().route("/api/stats", get(super::stats_get_action))
}
