//! One-second countdown for timed tasks, plus clock formatting.

/// Result of advancing a countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still running with this many seconds left.
    Running {
        /// Seconds remaining after the tick.
        remaining_secs: u32,
    },
    /// Reached zero on this tick.
    Expired,
}

/// Seconds left on an active task's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u32,
}

impl Countdown {
    /// Countdown for a limit given in minutes.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self {
            remaining_secs: minutes.saturating_mul(60),
        }
    }

    /// Seconds left.
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether the countdown already reached zero.
    pub const fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Advance by one second.
    pub const fn tick(&mut self) -> CountdownTick {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }
}

/// Format seconds as `MM:SS`.
pub fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format milliseconds as `HH:MM:SS`, rounding partial seconds down.
pub fn format_hh_mm_ss(ms: u64) -> String {
    let total = ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
