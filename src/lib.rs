pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::*;
pub use database::*;
pub use errors::*;
pub use models::*;
pub use services::*;
