pub mod analysis;
pub mod entities;
pub mod extractor;
pub mod ports;
pub mod prompts;
pub mod resolution;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
