//! The fixed key set.
//!
//! | Key | Type | Default when missing |
//! |-----|------|----------------------|
//! | `player:character` | JSON | no character |
//! | `tasks:sequence` | Integer | 0 |
//! | `guard:cheat_attempts` | Integer | 0 |
//! | `cooldown:end_ms` | Integer | no cooldown |
//! | `cooldown:completions` | Integer | 0 |
//! | `skips:consecutive` | Integer | 0 |
//! | `skips:penalty_active` | Boolean | false |

/// One persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreKey {
    /// Serialized character.
    Character,
    /// Global scenario counter.
    Sequence,
    /// Cumulative premature completions.
    CheatAttempts,
    /// Epoch milliseconds when the lockout ends.
    CooldownEnd,
    /// Tasks completed since the last lockout.
    SessionCompletions,
    /// Declines since the last completion or manual failure.
    ConsecutiveSkips,
    /// Whether declines currently cost XP.
    SkipPenaltyActive,
}

impl StoreKey {
    /// Every key, in table order.
    pub const ALL: [Self; 7] = [
        Self::Character,
        Self::Sequence,
        Self::CheatAttempts,
        Self::CooldownEnd,
        Self::SessionCompletions,
        Self::ConsecutiveSkips,
        Self::SkipPenaltyActive,
    ];

    /// The key string used by the backing store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "player:character",
            Self::Sequence => "tasks:sequence",
            Self::CheatAttempts => "guard:cheat_attempts",
            Self::CooldownEnd => "cooldown:end_ms",
            Self::SessionCompletions => "cooldown:completions",
            Self::ConsecutiveSkips => "skips:consecutive",
            Self::SkipPenaltyActive => "skips:penalty_active",
        }
    }
}

impl core::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
