pub mod config;
pub mod preload;
