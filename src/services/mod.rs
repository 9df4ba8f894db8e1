pub mod availability_service;
pub mod schedule_service;
pub mod unavailability_service;

pub use availability_service::*;
pub use schedule_service::*;
pub use unavailability_service::*;
