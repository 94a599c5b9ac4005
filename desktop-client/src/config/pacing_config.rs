use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PacingConfig {
    pub result_check_delay_ms: u64,
    pub computer_move_delay_ms: u64,
}

impl PacingConfig {
    pub fn result_check_delay(&self) -> Duration {
        Duration::from_millis(self.result_check_delay_ms)
    }

    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }
}

impl Validate for PacingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.result_check_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "result_check_delay_ms must not exceed {} ms",
                MAX_DELAY_MS
            ));
        }
        if self.computer_move_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {} ms",
                MAX_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            result_check_delay_ms: 10,
            computer_move_delay_ms: 750,
        }
    }
}
