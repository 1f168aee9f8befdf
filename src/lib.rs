pub mod config;
pub mod infra;
pub mod modules;
pub mod shared;
pub mod utils;
