pub mod entities;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

pub const MEAL_PLAN_FAILED_MESSAGE: &str = "Sorry, I couldn't generate a meal plan.";
