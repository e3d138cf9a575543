//! Task lifecycle state machine.
//!
//! ```text
//! Generated --accept--> Accepted --start_timer--> TimerRunning --expire--> TimeExpired
//!     |                    |                          |                        |
//!     |--start_timer-------+--------------------------'                        |
//!     |                    |--complete / fail--> Completed / Failed <----------'
//!     '--decline--> Declined
//! ```
//!
//! `Completed`, `Failed` and `Declined` are terminal. A running timer can
//! only end by completion or expiry; failing is only offered once the task
//! is accepted or the countdown has expired.

use serde::{Deserialize, Serialize};
use system64_types::RenderMode;

use crate::error::LifecycleError;

/// Where a single task is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPhase {
    /// Presented, no commitment yet.
    Generated,
    /// Accepted, untimed or not yet started.
    Accepted,
    /// Countdown running.
    TimerRunning,
    /// Countdown hit zero; waiting for the player's verdict.
    TimeExpired,
    /// Finished successfully.
    Completed,
    /// Failed manually or automatically.
    Failed,
    /// Skipped before acceptance.
    Declined,
}

/// Player or timer action applied to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Commit to the task.
    Accept,
    /// Skip the task.
    Decline,
    /// Begin the countdown.
    StartTimer,
    /// Countdown reached zero.
    Expire,
    /// Report success.
    Complete,
    /// Report failure.
    Fail,
}

impl core::fmt::Display for TaskAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
            Self::StartTimer => "start the timer",
            Self::Expire => "expire",
            Self::Complete => "complete",
            Self::Fail => "fail",
        };
        f.write_str(s)
    }
}

impl TaskPhase {
    /// The phase reached by applying `action`.
    pub const fn apply(self, action: TaskAction) -> Result<Self, LifecycleError> {
        match (self, action) {
            (Self::Generated, TaskAction::Accept) => Ok(Self::Accepted),
            (Self::Generated, TaskAction::Decline) => Ok(Self::Declined),
            (Self::Generated | Self::Accepted, TaskAction::StartTimer) => Ok(Self::TimerRunning),
            (Self::TimerRunning, TaskAction::Expire) => Ok(Self::TimeExpired),
            (Self::Accepted | Self::TimerRunning | Self::TimeExpired, TaskAction::Complete) => {
                Ok(Self::Completed)
            }
            (Self::Accepted | Self::TimeExpired, TaskAction::Fail) => Ok(Self::Failed),
            (
                Self::TimerRunning,
                TaskAction::Accept | TaskAction::StartTimer | TaskAction::Fail | TaskAction::Decline,
            ) => Err(LifecycleError::TimerActive { action }),
            (Self::Accepted | Self::TimeExpired, TaskAction::Decline) => {
                Err(LifecycleError::TaskInProgress { action })
            }
            (Self::Completed | Self::Failed | Self::Declined, _) => {
                Err(LifecycleError::AlreadyResolved { phase: self })
            }
            (from, action) => Err(LifecycleError::InvalidTransition { from, action }),
        }
    }

    /// Accepted or further along, but not yet resolved.
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::Accepted | Self::TimerRunning | Self::TimeExpired)
    }

    /// Completed, failed or declined.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Declined)
    }

    /// Which action set the presentation layer should offer.
    pub const fn render_mode(self) -> Option<RenderMode> {
        match self {
            Self::Generated => Some(RenderMode::Initial),
            Self::Accepted | Self::TimeExpired => Some(RenderMode::Accepted),
            Self::TimerRunning => Some(RenderMode::TimerActive),
            Self::Completed | Self::Failed | Self::Declined => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_paths() {
        assert_eq!(TaskPhase::Generated.apply(TaskAction::Accept), Ok(TaskPhase::Accepted));
        assert_eq!(TaskPhase::Accepted.apply(TaskAction::Complete), Ok(TaskPhase::Completed));
        assert_eq!(TaskPhase::Accepted.apply(TaskAction::Fail), Ok(TaskPhase::Failed));
        assert_eq!(TaskPhase::Generated.apply(TaskAction::Decline), Ok(TaskPhase::Declined));
    }

    #[test]
    fn timer_reachable_from_generated_and_accepted() {
        assert_eq!(
            TaskPhase::Generated.apply(TaskAction::StartTimer),
            Ok(TaskPhase::TimerRunning)
        );
        assert_eq!(
            TaskPhase::Accepted.apply(TaskAction::StartTimer),
            Ok(TaskPhase::TimerRunning)
        );
        assert_eq!(TaskPhase::TimerRunning.apply(TaskAction::Expire), Ok(TaskPhase::TimeExpired));
        assert_eq!(TaskPhase::TimeExpired.apply(TaskAction::Fail), Ok(TaskPhase::Failed));
        assert_eq!(TaskPhase::TimeExpired.apply(TaskAction::Complete), Ok(TaskPhase::Completed));
    }

    #[test]
    fn running_timer_blocks_other_actions() {
        for action in [
            TaskAction::Accept,
            TaskAction::StartTimer,
            TaskAction::Fail,
            TaskAction::Decline,
        ] {
            assert_eq!(
                TaskPhase::TimerRunning.apply(action),
                Err(LifecycleError::TimerActive { action })
            );
        }
    }

    #[test]
    fn accepted_task_cannot_be_declined() {
        assert_eq!(
            TaskPhase::Accepted.apply(TaskAction::Decline),
            Err(LifecycleError::TaskInProgress {
                action: TaskAction::Decline
            })
        );
    }

    #[test]
    fn generated_task_cannot_complete_or_fail() {
        assert!(matches!(
            TaskPhase::Generated.apply(TaskAction::Complete),
            Err(LifecycleError::InvalidTransition { .. })
        ));
        assert!(matches!(
            TaskPhase::Generated.apply(TaskAction::Fail),
            Err(LifecycleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn terminal_phases_reject_everything() {
        for phase in [TaskPhase::Completed, TaskPhase::Failed, TaskPhase::Declined] {
            assert!(phase.is_terminal());
            assert_eq!(phase.render_mode(), None);
            assert_eq!(
                phase.apply(TaskAction::Accept),
                Err(LifecycleError::AlreadyResolved { phase })
            );
        }
    }

    #[test]
    fn render_modes() {
        assert_eq!(TaskPhase::Generated.render_mode(), Some(RenderMode::Initial));
        assert_eq!(TaskPhase::Accepted.render_mode(), Some(RenderMode::Accepted));
        assert_eq!(TaskPhase::TimerRunning.render_mode(), Some(RenderMode::TimerActive));
        assert!(TaskPhase::TimerRunning.is_in_progress());
        assert!(!TaskPhase::Generated.is_in_progress());
    }
}
