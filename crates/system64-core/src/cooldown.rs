//! Emergency cooldown lockout.
//!
//! Completing `tasks_before_cooldown` tasks in one session locks every
//! task-affecting action for `duration_ms` of real time. The end timestamp is
//! persisted, so closing and reopening does not lift the lockout early; a
//! lockout found expired on load is cleared together with the completion
//! counter.

use system64_tasks::format_hh_mm_ss;
use tracing::info;

use crate::config::CooldownConfig;

/// Lockout state at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    /// No lockout.
    Inactive,
    /// Locked for this many more milliseconds.
    Active {
        /// Milliseconds until the lockout ends.
        remaining_ms: u64,
    },
    /// A lockout was pending and has just been lifted.
    Expired,
}

/// Completion counter and lockout end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    end_ms: Option<i64>,
    completions: u32,
}

impl Cooldown {
    /// Restore from persisted values.
    pub const fn new(end_ms: Option<i64>, completions: u32) -> Self {
        Self {
            end_ms,
            completions,
        }
    }

    /// Epoch milliseconds when the lockout ends, if one is set.
    pub const fn end_ms(&self) -> Option<i64> {
        self.end_ms
    }

    /// Completions since the last lockout.
    pub const fn completions(&self) -> u32 {
        self.completions
    }

    /// Whether actions are locked at `now_ms`.
    pub fn is_active(&self, now_ms: i64) -> bool {
        self.end_ms.is_some_and(|end| now_ms < end)
    }

    /// Milliseconds left at `now_ms`; zero when not locked.
    pub fn remaining_ms(&self, now_ms: i64) -> u64 {
        self.end_ms
            .map(|end| end.saturating_sub(now_ms))
            .and_then(|ms| u64::try_from(ms).ok())
            .unwrap_or(0)
    }

    /// Remaining lockout as `HH:MM:SS`, `None` when not locked.
    pub fn remaining_display(&self, now_ms: i64) -> Option<String> {
        self.is_active(now_ms)
            .then(|| format_hh_mm_ss(self.remaining_ms(now_ms)))
    }

    /// Lift an elapsed lockout.
    pub fn refresh(&mut self, now_ms: i64) -> CooldownStatus {
        match self.end_ms {
            None => CooldownStatus::Inactive,
            Some(end) if now_ms < end => CooldownStatus::Active {
                remaining_ms: self.remaining_ms(now_ms),
            },
            Some(_) => {
                self.end_ms = None;
                self.completions = 0;
                info!("Cooldown finished");
                CooldownStatus::Expired
            }
        }
    }

    /// Count a completion; returns `true` when it starts a lockout.
    pub fn record_completion(&mut self, now_ms: i64, config: &CooldownConfig) -> bool {
        self.completions = self.completions.saturating_add(1);
        if self.end_ms.is_some() || self.completions < config.tasks_before_cooldown {
            return false;
        }
        let duration = i64::try_from(config.duration_ms).unwrap_or(i64::MAX);
        let end = now_ms.saturating_add(duration);
        self.end_ms = Some(end);
        info!(
            completions = self.completions,
            end_ms = end,
            "Emergency cooldown initiated"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twentieth_completion_locks_for_an_hour() {
        let config = CooldownConfig::default();
        let mut cooldown = Cooldown::default();
        for _ in 0..19 {
            assert!(!cooldown.record_completion(0, &config));
        }
        assert!(!cooldown.is_active(0));
        assert!(cooldown.record_completion(1_000, &config));
        assert_eq!(cooldown.end_ms(), Some(3_601_000));
        assert!(cooldown.is_active(3_600_999));
        assert!(!cooldown.is_active(3_601_000));
        assert_eq!(cooldown.remaining_display(1_000).as_deref(), Some("01:00:00"));
    }

    #[test]
    fn refresh_clears_elapsed_lockout() {
        let mut cooldown = Cooldown::new(Some(10_000), 20);
        assert_eq!(
            cooldown.refresh(9_000),
            CooldownStatus::Active { remaining_ms: 1_000 }
        );
        assert_eq!(cooldown.refresh(10_000), CooldownStatus::Expired);
        assert_eq!(cooldown, Cooldown::default());
        assert_eq!(cooldown.refresh(10_000), CooldownStatus::Inactive);
        assert!(cooldown.remaining_display(10_000).is_none());
    }
}
