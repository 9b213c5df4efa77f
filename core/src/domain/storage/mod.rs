pub mod entities;
pub mod ports;

pub use entities::ClientState;
pub use ports::ClientStateRepository;
