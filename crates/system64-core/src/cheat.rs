//! Premature-completion detection.
//!
//! A completion reported sooner than the configured minimum after the task
//! was generated is treated as cheating. Each offense is counted; the
//! offense that reaches the configured maximum escalates to a full reset.
//! The counter is cumulative across tasks and sessions.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::warn;

use crate::config::AntiCheatConfig;

/// Rebuke lines, one chosen per offense.
pub const CHEAT_MESSAGES: [&str; 10] = [
    "Liar. The task was just given.",
    "Seriously? You think I wouldn't notice?",
    "Try actually doing the task, pal.",
    "My grandma could click faster... if she was trying to cheat.",
    "Alert! Suspiciously fast completion detected.",
    "Were you even trying or just mashing buttons?",
    "That's not how this works. That's not how any of this works.",
    "Okay, Flash. Slow down a bit.",
    "Whoa there, speedy! Give it a moment.",
    "Error 402: Payment (of effort) Required.",
];

/// Shown when the offense count reaches the maximum.
pub const CHEAT_RESET_MESSAGE: &str = "Cheaters get what they deserve. System reset.";

/// What to do about one offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheatVerdict {
    /// Rebuke and restore the task.
    Rebuke {
        /// Offenses so far, including this one.
        attempts: u32,
        /// The rebuke line.
        message: &'static str,
    },
    /// Wipe all state.
    Reset {
        /// Offenses so far, including this one.
        attempts: u32,
    },
}

/// Whether a completion at `now_ms` came too soon after `generated_at_ms`.
///
/// A clock that went backwards counts as too soon.
pub fn is_premature(generated_at_ms: i64, now_ms: i64, config: &AntiCheatConfig) -> bool {
    let min = i64::try_from(config.min_task_time_ms).unwrap_or(i64::MAX);
    now_ms.saturating_sub(generated_at_ms) < min
}

/// Count one offense and decide the response.
pub fn record_offense(
    attempts: &mut u32,
    config: &AntiCheatConfig,
    rng: &mut impl Rng,
) -> CheatVerdict {
    *attempts = attempts.saturating_add(1);
    warn!(attempts = *attempts, max = config.max_cheat_attempts, "Premature completion");
    if *attempts >= config.max_cheat_attempts {
        return CheatVerdict::Reset {
            attempts: *attempts,
        };
    }
    let message = CHEAT_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(CHEAT_RESET_MESSAGE);
    CheatVerdict::Rebuke {
        attempts: *attempts,
        message,
    }
}
