pub mod ngo;

pub use ngo::{NgoEntry, SERVES_ENTIRE_REGION};
