// HTTP routes
pub mod health;
pub mod issues;

pub use health::*;
pub use issues::*;
