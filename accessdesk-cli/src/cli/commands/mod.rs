pub mod config;
pub mod portal;
pub mod query;
