//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod test_dependencies;
pub mod traits;

pub use ai::create_ai_client;
pub use test_dependencies::{FailingAI, MockAI, SlowAI};
pub use traits::*;
