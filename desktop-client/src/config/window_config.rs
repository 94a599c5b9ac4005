use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_WIDTH: f32 = 240.0;
const MIN_HEIGHT: f32 = 300.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT) {
            return Err(format!(
                "window must be at least {}x{}",
                MIN_WIDTH, MIN_HEIGHT
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}
