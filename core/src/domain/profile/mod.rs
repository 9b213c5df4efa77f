pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{HealthGoals, UserProfile};
pub use ports::ProfileService;
