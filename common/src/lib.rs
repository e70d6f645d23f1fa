pub mod config;
pub mod dashboard;
pub mod filter;
pub mod format;
pub mod order;
pub mod profile;
pub mod progress;
pub mod query;
