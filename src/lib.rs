pub mod analysis;
pub mod api;
pub mod cache;
pub mod collector;
pub mod config;
pub mod defaults;
pub mod error;
pub mod rate_limit;
pub mod reference;
