//! Consecutive-decline tracking.

use tracing::{debug, info};

use crate::config::SkipConfig;

/// Effect of one decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipOutcome {
    /// Plain cancellation.
    Cancelled,
    /// The penalty was already active; deduct this much XP.
    Penalized {
        /// XP to deduct.
        xp: u32,
    },
    /// Exactly at the warning threshold.
    Warned,
    /// The penalty switched on with this decline. No XP is deducted for it.
    PenaltyActivated,
}

/// Declines since the last completion or manual failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipTracker {
    /// Consecutive declines.
    pub consecutive: u32,
    /// Whether declines currently cost XP.
    pub penalty_active: bool,
}

impl SkipTracker {
    /// Restore a tracker from persisted values.
    pub const fn new(consecutive: u32, penalty_active: bool) -> Self {
        Self {
            consecutive,
            penalty_active,
        }
    }

    /// Count a decline.
    ///
    /// The penalty check runs before activation, so the decline that
    /// crosses the threshold is itself free.
    pub fn record_decline(&mut self, config: &SkipConfig) -> SkipOutcome {
        self.consecutive = self.consecutive.saturating_add(1);
        debug!(consecutive = self.consecutive, "Task declined");
        if self.penalty_active {
            SkipOutcome::Penalized {
                xp: config.penalty_xp,
            }
        } else if self.consecutive == config.warning_threshold {
            SkipOutcome::Warned
        } else if self.consecutive >= config.penalty_threshold {
            self.penalty_active = true;
            info!(consecutive = self.consecutive, "Skip penalty activated");
            SkipOutcome::PenaltyActivated
        } else {
            SkipOutcome::Cancelled
        }
    }

    /// Zero the counter and lift the penalty.
    ///
    /// Returns whether a penalty was lifted.
    pub const fn reset(&mut self) -> bool {
        let was_active = self.penalty_active;
        self.consecutive = 0;
        self.penalty_active = false;
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_fires_once_at_threshold() {
        let config = SkipConfig::default();
        let mut tracker = SkipTracker::new(23, false);
        assert_eq!(tracker.record_decline(&config), SkipOutcome::Cancelled);
        assert_eq!(tracker.record_decline(&config), SkipOutcome::Warned);
        assert_eq!(tracker.record_decline(&config), SkipOutcome::Cancelled);
    }

    #[test]
    fn thirty_fifth_activates_thirty_sixth_penalizes() {
        let config = SkipConfig::default();
        let mut tracker = SkipTracker::default();
        for _ in 0..34 {
            let outcome = tracker.record_decline(&config);
            assert!(!matches!(outcome, SkipOutcome::Penalized { .. }));
        }
        assert!(!tracker.penalty_active);
        assert_eq!(tracker.record_decline(&config), SkipOutcome::PenaltyActivated);
        assert!(tracker.penalty_active);
        assert_eq!(tracker.record_decline(&config), SkipOutcome::Penalized { xp: 5 });
        assert_eq!(tracker.record_decline(&config), SkipOutcome::Penalized { xp: 5 });
    }

    #[test]
    fn reset_reports_lifted_penalty() {
        let mut tracker = SkipTracker::new(40, true);
        assert!(tracker.reset());
        assert_eq!(tracker, SkipTracker::default());
        assert!(!tracker.reset());
    }
}
