pub mod config;
pub mod error;
pub mod internships;
pub mod telemetry;
