pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod store;
pub mod vehicle;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::{create_app, AppState};
pub use query::{MatchReason, MatchRules, Query};
pub use store::{JsonFileSource, StaticSource, StoreError, VehicleSource};
pub use vehicle::Vehicle;
