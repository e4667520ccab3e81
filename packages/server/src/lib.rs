// Civic Issue Routing - API Core
//
// Classifies citizen-reported civic issues and suggests NGOs to route them to.
// A language model answers first; a deterministic keyword classifier stands in
// whenever the model is unavailable or its answer is unusable.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
