pub mod catalog;
pub mod export;
pub mod play_log;
pub mod roster;
pub mod session;
pub mod session_events;
pub mod stats;

// Re-export main components
pub use catalog::*;
pub use export::*;
pub use play_log::*;
pub use roster::*;
pub use session::*;
pub use session_events::*;
pub use stats::*;
