use log::Level;

use crate::lead::SimulatedIntake;

/// How long the simulated intake takes to accept a lead.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Upper bound on a submission before it is reported as failed.
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Wizard transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn intake() -> SimulatedIntake {
    SimulatedIntake {
        delay_ms: SUBMIT_DELAY_MS,
        timeout_ms: SUBMIT_TIMEOUT_MS,
    }
}
