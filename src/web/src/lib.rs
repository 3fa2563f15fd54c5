mod common;
mod dashboard;
mod error;
mod refresh;
mod routes;
mod stats;

pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;

use axum::response::IntoResponse;
use fortnite_core::DashboardData;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct StatsDashboardServer {
    data: DashboardAppData,
}

impl StatsDashboardServer {
    pub fn new(data: DashboardAppData) -> Self {
        StatsDashboardServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 18000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:18000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly");
        }
    }
}

/// Shared handler state. The dashboard dataset is read-only after startup,
/// so a plain `Arc` is enough and handlers never take a lock.
pub struct DashboardAppData {
    pub data: Arc<DashboardData>,
}

impl Clone for DashboardAppData {
    fn clone(&self) -> Self {
        DashboardAppData {
            data: Arc::clone(&self.data),
        }
    }
}
