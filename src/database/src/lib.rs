pub mod generators;
pub mod loaders;

pub use generators::DatabaseGenerator;
pub use loaders::{DatabaseEntity, DatabaseLoader, PlayerEntity, StatRecordEntity};
