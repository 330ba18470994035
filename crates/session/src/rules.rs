//! Round rules: difficulty thresholds and the level countdown

use serde::{Deserialize, Serialize};

/// Game difficulty, controlling the pass threshold and the time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Minimum score needed to pass a level.
    pub fn score_requirement(&self) -> u8 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 60,
            Difficulty::Hard => 75,
        }
    }

    /// Drawing time allowed per level, in seconds.
    pub fn time_limit_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 50,
            Difficulty::Hard => 40,
        }
    }
}

/// Countdown for a level's drawing time.
///
/// Pure state: the caller supplies the one-second cadence by calling
/// [`tick`]. Sounds, music cues and ending the level belong to the caller.
///
/// [`tick`]: Countdown::tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Countdown {
    seconds_remaining: Option<u32>,
}

impl Countdown {
    /// Create an idle countdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown with the given number of seconds.
    pub fn start(&mut self, seconds: u32) {
        self.seconds_remaining = Some(seconds);
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true exactly once, on the tick that reaches zero; the
    /// countdown then goes idle until restarted. Ticking an idle countdown
    /// does nothing.
    pub fn tick(&mut self) -> bool {
        match self.seconds_remaining {
            Some(seconds) if seconds > 1 => {
                self.seconds_remaining = Some(seconds - 1);
                false
            }
            Some(_) => {
                self.seconds_remaining = None;
                true
            }
            None => false,
        }
    }

    /// Seconds left, or None when idle.
    pub fn remaining(&self) -> Option<u32> {
        self.seconds_remaining
    }

    /// Whether the countdown is running.
    pub fn is_running(&self) -> bool {
        self.seconds_remaining.is_some()
    }
}
