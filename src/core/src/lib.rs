pub mod dashboard;
pub mod player;
pub mod stats;
pub mod utils;

pub use dashboard::DashboardData;
pub use player::{PlayerEntry, PlayerRegistry};
pub use stats::StatRecord;
