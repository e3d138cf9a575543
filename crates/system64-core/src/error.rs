//! Session error type.
//!
//! Most variants are soft rejections: the action is refused, the player is
//! told why, and nothing changes. Their `Display` text is exactly what the
//! player sees. The wrapped crate errors are internal failures.

use system64_db::DbError;
use system64_ledger::LedgerError;
use system64_tasks::{LifecycleError, TaskError};

use crate::profile::SetupError;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The emergency cooldown is active.
    #[error("System Lockout: {action} unavailable.")]
    Lockout {
        /// What is locked, e.g. "New tasks".
        action: &'static str,
    },

    /// No character has been created yet.
    #[error("Create a character first.")]
    NoCharacter,

    /// A character already exists; reset first.
    #[error("A character already exists. Reset to start over.")]
    CharacterExists,

    /// An accepted task must be resolved before a new one is generated.
    #[error("Resolve current task.")]
    TaskInProgress,

    /// There is no task to act on.
    #[error("No active task.")]
    NoActiveTask,

    /// The action names a task that is no longer the active one.
    #[error("Task mismatch.")]
    TaskMismatch,

    /// The action is not legal in the task's current phase.
    #[error("Action unavailable: {0}.")]
    Lifecycle(#[from] LifecycleError),

    /// Starting a timer on an untimed task.
    #[error("This task does not have a valid time limit.")]
    NoTimeLimit,

    /// Reporting a timer result when no timer has expired.
    #[error("No expired timer to report.")]
    NoExpiredTimer,

    /// A cheat rebuke is waiting to be acknowledged.
    #[error("Acknowledge the warning first.")]
    CheatInterruptPending,

    /// Acknowledging when there is no rebuke.
    #[error("Nothing to acknowledge.")]
    NoCheatInterrupt,

    /// Confirming or cancelling a reset that was never started.
    #[error("No reset in progress.")]
    ResetNotStarted,

    /// A reset was requested while a countdown runs.
    #[error("Cannot reset while a timed task is active.")]
    ResetDuringTimer,

    /// Character setup input was invalid.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// Task generation failed.
    #[error("task generation failed: {0}")]
    Task(#[from] TaskError),

    /// A progression update failed.
    #[error("progression failed: {0}")]
    Ledger(#[from] LedgerError),

    /// The store failed.
    #[error("storage failed: {0}")]
    Store(#[from] DbError),
}

impl SessionError {
    /// Whether this is a refused action the player should be told about,
    /// as opposed to an internal failure.
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::Task(_) | Self::Ledger(_) | Self::Store(_))
    }
}
