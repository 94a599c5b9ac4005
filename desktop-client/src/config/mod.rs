mod config;
mod pacing_config;
mod window_config;

pub use config::{Config, get_config_manager};
pub use pacing_config::PacingConfig;
pub use window_config::WindowConfig;
