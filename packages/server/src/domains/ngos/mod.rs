pub mod models;
pub mod roster;

// Re-export commonly used types
pub use models::{NgoEntry, SERVES_ENTIRE_REGION};
pub use roster::{NgoRoster, RosterError};
