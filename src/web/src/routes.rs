use crate::DashboardAppData;
use crate::common::default_handler::default_handler;
use crate::dashboard::dashboard_routes;
use crate::refresh::refresh_routes;
use crate::stats::stats_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<DashboardAppData> {
        Router::<DashboardAppData>::new()
            .merge(dashboard_routes())
            .merge(stats_routes())
            .merge(refresh_routes())
            .fallback(default_handler)
    }
}
