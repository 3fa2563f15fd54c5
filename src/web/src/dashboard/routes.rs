use crate::DashboardAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<DashboardAppData> {
    Router::new().route("/", get(super::dashboard_action))
}
