pub mod animation;
pub mod config;
pub mod field;
pub mod grid;
pub mod tools;

pub use config::{get_config, reload_config};
