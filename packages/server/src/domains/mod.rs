// Business domains
pub mod issues;
pub mod ngos;
