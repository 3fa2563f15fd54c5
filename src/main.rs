use fortnite_core::utils::TimeEstimation;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use std::sync::Arc;
use web::{DashboardAppData, StatsDashboardServer};

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let dashboard_data = DatabaseGenerator::generate(&database);

    info!(
        "loaded {} players, {} stat records",
        dashboard_data.registry.len(),
        dashboard_data.stats.len()
    );

    let data = DashboardAppData {
        data: Arc::new(dashboard_data),
    };

    StatsDashboardServer::new(data).run().await;
}
