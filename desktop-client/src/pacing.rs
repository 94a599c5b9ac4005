use std::time::{Duration, Instant};

use crate::config::PacingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingStep {
    ShowResult,
    ComputerMove,
}

/// Holds at most one pending step and releases it once its deadline has passed.
pub struct MoveScheduler {
    result_check_delay: Duration,
    computer_move_delay: Duration,
    pending: Option<(PacingStep, Instant)>,
}

impl MoveScheduler {
    pub fn new(config: &PacingConfig) -> Self {
        Self {
            result_check_delay: config.result_check_delay(),
            computer_move_delay: config.computer_move_delay(),
            pending: None,
        }
    }

    pub fn schedule_result_check(&mut self, now: Instant) {
        self.pending = Some((PacingStep::ShowResult, now + self.result_check_delay));
    }

    pub fn schedule_computer_move(&mut self, now: Instant) {
        self.pending = Some((PacingStep::ComputerMove, now + self.computer_move_delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    pub fn pending_step(&self) -> Option<PacingStep> {
        self.pending.map(|(step, _)| step)
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    pub fn poll(&mut self, now: Instant) -> Option<PacingStep> {
        match self.pending {
            Some((step, due)) if now >= due => {
                self.pending = None;
                Some(step)
            }
            _ => None,
        }
    }
}
