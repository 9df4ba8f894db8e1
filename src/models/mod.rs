pub mod branch;
pub mod customer;
pub mod professional;
pub mod schedule;
pub mod service;
pub mod time_range;
pub mod unavailability;

pub use branch::*;
pub use customer::*;
pub use professional::*;
pub use schedule::*;
pub use service::*;
pub use time_range::*;
pub use unavailability::*;
