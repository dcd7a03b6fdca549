pub mod actions;
pub mod errors;
pub mod game;
pub mod player;

// Re-export all types
pub use actions::*;
pub use errors::*;
pub use game::*;
pub use player::*;

pub type PlayerId = uuid::Uuid;
pub type PlayId = uuid::Uuid;
